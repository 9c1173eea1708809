use serde::Serialize;
use utoipa::ToSchema;

use super::{BranchSnapshot, MonitoringFilter, MonitoringRow, StockStatus};

/// Bar of the order-count chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BranchOrders {
    pub branch: String,
    pub orders: u64,
}

/// Slice of the status donut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatusCount {
    pub status: StockStatus,
    pub count: usize,
}

/// Group of the per-product bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProductTotals {
    pub name: String,
    pub stock: i64,
    pub predicted: i64,
    pub recommended: i64,
}

/// Figures of the statistics card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Distinct branch names.
    pub branches: usize,
    pub orders: u64,
    pub predicted: i64,
    pub recommended: i64,
}

/// Order count per branch. A branch listed in several months is summed into
/// one bar placed where it first appears.
pub fn orders_by_branch(records: &[BranchSnapshot]) -> Vec<BranchOrders> {
    let mut bars: Vec<BranchOrders> = Vec::new();
    for record in records {
        match bars.iter_mut().find(|bar| bar.branch == record.branch) {
            Some(bar) => bar.orders += u64::from(record.orders),
            None => bars.push(BranchOrders {
                branch: record.branch.clone(),
                orders: u64::from(record.orders),
            }),
        }
    }
    bars
}

/// Number of product lines per status across all records, classified per product.
pub fn status_counts(records: &[BranchSnapshot]) -> Vec<StatusCount> {
    let mut counts = [0usize; 3];
    for product in records.iter().flat_map(|r| &r.products) {
        let slot = match product.status() {
            StockStatus::Shortage => 0,
            StockStatus::Normal => 1,
            StockStatus::Surplus => 2,
        };
        counts[slot] += 1;
    }
    StockStatus::ALL
        .into_iter()
        .zip(counts)
        .map(|(status, count)| StatusCount { status, count })
        .collect()
}

/// Stock, predicted demand and recommended order summed per product over all
/// records, products in first-seen order.
pub fn product_totals(records: &[BranchSnapshot]) -> Vec<ProductTotals> {
    let mut totals: Vec<ProductTotals> = Vec::new();
    for product in records.iter().flat_map(|r| &r.products) {
        let entry = match totals.iter().position(|t| t.name == product.name) {
            Some(idx) => &mut totals[idx],
            None => {
                totals.push(ProductTotals {
                    name: product.name.clone(),
                    stock: 0,
                    predicted: 0,
                    recommended: 0,
                });
                let last = totals.len() - 1;
                &mut totals[last]
            }
        };
        entry.stock += product.stock;
        entry.predicted += product.predicted;
        entry.recommended += product.recommended;
    }
    totals
}

pub fn totals(records: &[BranchSnapshot]) -> Totals {
    let mut names: Vec<&str> = records.iter().map(|r| r.branch.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    records.iter().fold(
        Totals {
            branches: names.len(),
            ..Totals::default()
        },
        |acc, r| Totals {
            orders: acc.orders + u64::from(r.orders),
            predicted: acc.predicted + r.total_predicted(),
            recommended: acc.recommended + r.total_recommended(),
            ..acc
        },
    )
}

/// Everything the monitoring dashboard renders for one search.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringReport {
    pub rows: Vec<MonitoringRow>,
    pub orders_by_branch: Vec<BranchOrders>,
    pub status_counts: Vec<StatusCount>,
    pub product_totals: Vec<ProductTotals>,
    pub totals: Totals,
}

impl MonitoringReport {
    pub fn build(records: &[BranchSnapshot], filter: &MonitoringFilter) -> Self {
        let filtered = filter.apply(records);
        Self {
            rows: filtered.iter().map(BranchSnapshot::row).collect(),
            orders_by_branch: orders_by_branch(&filtered),
            status_counts: status_counts(&filtered),
            product_totals: product_totals(&filtered),
            totals: totals(&filtered),
        }
    }
}
