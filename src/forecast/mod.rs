//! Demand forecast board: per-product expected demand against current stock,
//! the suggested order quantity and the monthly trend behind them.

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    monitoring::{StockStatus, classify},
    period::{MonthRange, YearMonth},
};

pub mod fixtures;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ForecastRow {
    pub product: String,
    pub expected: i64,
    pub stock: i64,
    pub suggested: i64,
    pub status: StockStatus,
}

impl ForecastRow {
    pub fn new(product: impl Into<String>, expected: i64, stock: i64, suggested: i64) -> Self {
        Self {
            product: product.into(),
            expected,
            stock,
            suggested,
            status: classify(stock, expected),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyForecast {
    pub month: YearMonth,
    pub expected: i64,
    pub stock: i64,
    pub suggested: i64,
}

impl MonthlyForecast {
    pub const fn new(month: YearMonth, expected: i64, stock: i64, suggested: i64) -> Self {
        Self {
            month,
            expected,
            stock,
            suggested,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeriesKind {
    ExpectedDemand,
    CurrentStock,
    SuggestedOrder,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 3] = [
        SeriesKind::ExpectedDemand,
        SeriesKind::CurrentStock,
        SeriesKind::SuggestedOrder,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SeriesKind::ExpectedDemand => "예상 수요",
            SeriesKind::CurrentStock => "현재 재고",
            SeriesKind::SuggestedOrder => "발주 추천",
        }
    }

    fn pick(self, month: &MonthlyForecast) -> i64 {
        match self {
            SeriesKind::ExpectedDemand => month.expected,
            SeriesKind::CurrentStock => month.stock,
            SeriesKind::SuggestedOrder => month.suggested,
        }
    }
}

/// Point of the trend line chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SeriesPoint {
    #[schema(value_type = String, example = "2025-01")]
    pub month: YearMonth,
    pub kind: SeriesKind,
    pub value: i64,
}

#[derive(Debug, Clone, Default)]
pub struct ForecastBook {
    rows: Vec<ForecastRow>,
    monthly: Vec<(String, Vec<MonthlyForecast>)>,
}

impl ForecastBook {
    pub fn new(rows: Vec<ForecastRow>, monthly: Vec<(String, Vec<MonthlyForecast>)>) -> Self {
        Self { rows, monthly }
    }

    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    /// Rows whose product name contains `keyword`, ignoring case.
    pub fn search(&self, keyword: &str) -> Vec<ForecastRow> {
        let needle = keyword.trim().to_lowercase();
        self.rows
            .iter()
            .filter(|row| row.product.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Trend of one product as three series, each in month order, limited to
    /// `range` when given. Unknown products have no points.
    pub fn series(&self, product: &str, range: Option<&MonthRange>) -> Vec<SeriesPoint> {
        let Some((_, months)) = self.monthly.iter().find(|(name, _)| name == product) else {
            return Vec::new();
        };
        let mut selected: Vec<&MonthlyForecast> = months
            .iter()
            .filter(|m| range.is_none_or(|r| r.contains(m.month)))
            .collect();
        selected.sort_by_key(|m| m.month);

        SeriesKind::ALL
            .into_iter()
            .flat_map(|kind| {
                selected.iter().map(move |m| SeriesPoint {
                    month: m.month,
                    kind,
                    value: kind.pick(m),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_status_comes_from_the_shared_classifier() {
        let book = fixtures::forecast_book();
        let statuses: Vec<_> = book.rows().iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            [StockStatus::Shortage, StockStatus::Normal, StockStatus::Surplus]
        );
    }

    #[test]
    fn search_ignores_case_and_blank_keyword() {
        let book = ForecastBook::new(
            vec![
                ForecastRow::new("Tylenol", 10, 10, 0),
                ForecastRow::new("Zyrtec", 10, 10, 0),
            ],
            Vec::new(),
        );
        assert_eq!(book.search("tyl").len(), 1);
        assert_eq!(book.search("  ").len(), 2);
        assert!(book.search("aspirin").is_empty());
    }

    #[test]
    fn series_is_limited_to_range() {
        let book = fixtures::forecast_book();
        let range = MonthRange::from_query(Some("2025-02"), Some("2025-03"))
            .unwrap()
            .unwrap();
        let points = book.series("타이레놀", Some(&range));
        assert_eq!(points.len(), 6);
        assert_eq!(points[0].kind, SeriesKind::ExpectedDemand);
        assert_eq!(points[0].value, 90);
        assert_eq!(points[5].kind, SeriesKind::SuggestedOrder);
        assert_eq!(points[5].value, 60);
        assert!(book.series("아스피린", None).is_empty());
    }
}
