use super::{ForecastBook, ForecastRow, MonthlyForecast};
use crate::period::YearMonth;

const ROWS: &[(&str, i64, i64, i64)] = &[
    ("타이레놀", 120, 30, 90),
    ("판피린", 300, 280, 20),
    ("지르텍", 200, 500, 0),
];

const MONTHLY: &[(&str, &[MonthlyForecast])] = &[
    (
        "타이레놀",
        &[
            MonthlyForecast::new(YearMonth::from_parts(2025, 1), 110, 40, 70),
            MonthlyForecast::new(YearMonth::from_parts(2025, 2), 90, 50, 80),
            MonthlyForecast::new(YearMonth::from_parts(2025, 3), 100, 40, 60),
            MonthlyForecast::new(YearMonth::from_parts(2025, 4), 120, 60, 60),
            MonthlyForecast::new(YearMonth::from_parts(2025, 5), 160, 90, 70),
            MonthlyForecast::new(YearMonth::from_parts(2025, 6), 170, 80, 90),
            MonthlyForecast::new(YearMonth::from_parts(2025, 7), 125, 30, 95),
        ],
    ),
    (
        "판피린",
        &[
            MonthlyForecast::new(YearMonth::from_parts(2025, 1), 220, 250, 25),
            MonthlyForecast::new(YearMonth::from_parts(2025, 2), 280, 300, 35),
            MonthlyForecast::new(YearMonth::from_parts(2025, 3), 260, 270, 10),
            MonthlyForecast::new(YearMonth::from_parts(2025, 4), 270, 275, 5),
            MonthlyForecast::new(YearMonth::from_parts(2025, 5), 280, 285, 0),
            MonthlyForecast::new(YearMonth::from_parts(2025, 6), 300, 280, 20),
            MonthlyForecast::new(YearMonth::from_parts(2025, 7), 250, 290, 10),
        ],
    ),
    (
        "지르텍",
        &[
            MonthlyForecast::new(YearMonth::from_parts(2025, 1), 110, 600, 0),
            MonthlyForecast::new(YearMonth::from_parts(2025, 2), 130, 550, 0),
            MonthlyForecast::new(YearMonth::from_parts(2025, 3), 160, 500, 0),
            MonthlyForecast::new(YearMonth::from_parts(2025, 4), 170, 490, 0),
            MonthlyForecast::new(YearMonth::from_parts(2025, 5), 180, 510, 0),
            MonthlyForecast::new(YearMonth::from_parts(2025, 6), 200, 520, 0),
            MonthlyForecast::new(YearMonth::from_parts(2025, 7), 140, 500, 0),
        ],
    ),
];

/// Forecast sample shown until the forecasting service is connected.
pub fn forecast_book() -> ForecastBook {
    ForecastBook::new(
        ROWS.iter()
            .map(|&(product, expected, stock, suggested)| {
                ForecastRow::new(product, expected, stock, suggested)
            })
            .collect(),
        MONTHLY
            .iter()
            .map(|&(product, months)| (product.to_string(), months.to_vec()))
            .collect(),
    )
}
