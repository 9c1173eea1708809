//! Branch monitoring: stock-versus-demand classification, filtering and the
//! chart aggregates of the HQ monitoring dashboard.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::period::YearMonth;

pub mod charts;
pub mod filter;
pub mod fixtures;

pub use charts::{BranchOrders, MonitoringReport, ProductTotals, StatusCount, Totals};
pub use filter::{MonitoringFilter, RegionPath};

/// Stock-versus-predicted-demand label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    Shortage,
    Normal,
    Surplus,
}

impl StockStatus {
    /// Display order of the donut chart.
    pub const ALL: [StockStatus; 3] = [StockStatus::Shortage, StockStatus::Normal, StockStatus::Surplus];

    pub fn as_str(self) -> &'static str {
        match self {
            StockStatus::Shortage => "SHORTAGE",
            StockStatus::Normal => "NORMAL",
            StockStatus::Surplus => "SURPLUS",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Shortage => "부족",
            StockStatus::Normal => "정상",
            StockStatus::Surplus => "과다",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stock status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for StockStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        StockStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed) || status.label() == trimmed)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Classifies a stock level against predicted demand.
///
/// Below 80% of the prediction is a shortage, above 120% a surplus; both
/// boundaries themselves count as normal. Compared in integers so the
/// boundaries are exact; widened to `i128` so no `i64` input overflows.
pub fn classify(stock: i64, predicted: i64) -> StockStatus {
    let (stock, predicted) = (i128::from(stock), i128::from(predicted));
    if stock * 5 < predicted * 4 {
        StockStatus::Shortage
    } else if stock * 5 > predicted * 6 {
        StockStatus::Surplus
    } else {
        StockStatus::Normal
    }
}

/// One product line of a branch snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLevel {
    pub name: String,
    pub stock: i64,
    pub predicted: i64,
    pub recommended: i64,
}

impl ProductLevel {
    pub fn status(&self) -> StockStatus {
        classify(self.stock, self.predicted)
    }
}

/// Monthly stock and demand picture of one branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchSnapshot {
    pub key: String,
    pub month: YearMonth,
    pub branch: String,
    pub orders: u32,
    pub products: Vec<ProductLevel>,
}

impl BranchSnapshot {
    /// Aligns parallel per-product maps into product lines.
    ///
    /// Products keep the order in which they first appear in `stock`, then
    /// `predicted`, then `recommended`; a product missing from one map counts 0 there.
    pub fn from_maps(
        key: impl Into<String>,
        month: YearMonth,
        branch: impl Into<String>,
        orders: u32,
        stock: &[(&str, i64)],
        predicted: &[(&str, i64)],
        recommended: &[(&str, i64)],
    ) -> Self {
        let mut products: Vec<ProductLevel> = Vec::new();
        let mut line = |name: &str| -> usize {
            match products.iter().position(|p| p.name == name) {
                Some(idx) => idx,
                None => {
                    products.push(ProductLevel {
                        name: name.to_string(),
                        stock: 0,
                        predicted: 0,
                        recommended: 0,
                    });
                    products.len() - 1
                }
            }
        };

        let mut stock_idx = Vec::with_capacity(stock.len());
        for (name, qty) in stock {
            stock_idx.push((line(name), *qty));
        }
        let mut predicted_idx = Vec::with_capacity(predicted.len());
        for (name, qty) in predicted {
            predicted_idx.push((line(name), *qty));
        }
        let mut recommended_idx = Vec::with_capacity(recommended.len());
        for (name, qty) in recommended {
            recommended_idx.push((line(name), *qty));
        }

        for (idx, qty) in stock_idx {
            products[idx].stock = qty;
        }
        for (idx, qty) in predicted_idx {
            products[idx].predicted = qty;
        }
        for (idx, qty) in recommended_idx {
            products[idx].recommended = qty;
        }

        Self {
            key: key.into(),
            month,
            branch: branch.into(),
            orders,
            products,
        }
    }

    pub fn total_stock(&self) -> i64 {
        self.products.iter().map(|p| p.stock).sum()
    }

    pub fn total_predicted(&self) -> i64 {
        self.products.iter().map(|p| p.predicted).sum()
    }

    pub fn total_recommended(&self) -> i64 {
        self.products.iter().map(|p| p.recommended).sum()
    }

    /// Branch-level status, computed from the totals over all products.
    pub fn status(&self) -> StockStatus {
        classify(self.total_stock(), self.total_predicted())
    }

    pub fn row(&self) -> MonitoringRow {
        MonitoringRow {
            key: self.key.clone(),
            month: self.month,
            branch: self.branch.clone(),
            orders: self.orders,
            status: self.status(),
        }
    }

    /// Per-product view of the branch, each row classified on its own.
    pub fn detail(&self) -> BranchDetail {
        BranchDetail {
            key: self.key.clone(),
            month: self.month,
            branch: self.branch.clone(),
            status: self.status(),
            products: self
                .products
                .iter()
                .map(|p| ProductRow {
                    name: p.name.clone(),
                    stock: p.stock,
                    predicted: p.predicted,
                    recommended: p.recommended,
                    status: p.status(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MonitoringRow {
    pub key: String,
    #[schema(value_type = String, example = "2025-01")]
    pub month: YearMonth,
    pub branch: String,
    pub orders: u32,
    pub status: StockStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProductRow {
    pub name: String,
    pub stock: i64,
    pub predicted: i64,
    pub recommended: i64,
    pub status: StockStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BranchDetail {
    pub key: String,
    #[schema(value_type = String, example = "2025-01")]
    pub month: YearMonth,
    pub branch: String,
    pub status: StockStatus,
    pub products: Vec<ProductRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month() -> YearMonth {
        "2025-01".parse().unwrap()
    }

    #[test]
    fn boundaries_are_normal() {
        assert_eq!(classify(16, 20), StockStatus::Normal);
        assert_eq!(classify(24, 20), StockStatus::Normal);
        assert_eq!(classify(15, 20), StockStatus::Shortage);
        assert_eq!(classify(25, 20), StockStatus::Surplus);
    }

    #[test]
    fn zero_prediction() {
        assert_eq!(classify(0, 0), StockStatus::Normal);
        assert_eq!(classify(1, 0), StockStatus::Surplus);
    }

    #[test]
    fn extreme_quantities_do_not_overflow() {
        assert_eq!(classify(i64::MAX, i64::MAX), StockStatus::Normal);
        assert_eq!(classify(i64::MAX, 1), StockStatus::Surplus);
        assert_eq!(classify(1, i64::MAX), StockStatus::Shortage);
        assert_eq!(classify(i64::MIN, i64::MAX), StockStatus::Shortage);
    }

    #[test]
    fn maps_are_aligned_by_product_name() {
        let snapshot = BranchSnapshot::from_maps(
            "1",
            month(),
            "대전서구점",
            10,
            &[("A", 5), ("B", 7)],
            &[("B", 3), ("C", 9)],
            &[("C", 1)],
        );
        let names: Vec<_> = snapshot.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(snapshot.products[0].predicted, 0);
        assert_eq!(snapshot.products[2].stock, 0);
        assert_eq!(snapshot.total_predicted(), 12);
        assert_eq!(snapshot.total_recommended(), 1);
    }

    #[test]
    fn branch_total_and_products_can_disagree() {
        let snapshot = BranchSnapshot::from_maps(
            "1",
            month(),
            "천안불당점",
            1,
            &[("A", 10), ("B", 30)],
            &[("A", 20), ("B", 20)],
            &[],
        );
        assert_eq!(snapshot.status(), StockStatus::Normal);
        let detail = snapshot.detail();
        assert_eq!(detail.products[0].status, StockStatus::Shortage);
        assert_eq!(detail.products[1].status, StockStatus::Surplus);
    }

    #[test]
    fn status_parses_codes_and_labels() {
        assert_eq!("shortage".parse::<StockStatus>(), Ok(StockStatus::Shortage));
        assert_eq!("과다".parse::<StockStatus>(), Ok(StockStatus::Surplus));
        assert!("LOW".parse::<StockStatus>().is_err());
    }
}
