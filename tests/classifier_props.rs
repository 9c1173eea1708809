//! Property tests for the stock classifier and the dashboard filter.

use proptest::prelude::*;
use yeahyak_portal::monitoring::{
    BranchSnapshot, MonitoringFilter, StockStatus, charts, classify, fixtures::branch_snapshots,
};

fn record_strategy() -> impl Strategy<Value = BranchSnapshot> {
    (
        0u32..3,
        prop::collection::vec((0i64..500, 0i64..500), 0..8),
        0u32..1000,
    )
        .prop_map(|(city, levels, orders)| {
            let branch = ["천안불당점", "대전둔산점", "청주오창점"][city as usize];
            let names: Vec<String> = (0..levels.len()).map(|i| format!("제품{i}")).collect();
            let stock: Vec<(&str, i64)> = names
                .iter()
                .zip(&levels)
                .map(|(n, (s, _))| (n.as_str(), *s))
                .collect();
            let predicted: Vec<(&str, i64)> = names
                .iter()
                .zip(&levels)
                .map(|(n, (_, p))| (n.as_str(), *p))
                .collect();
            BranchSnapshot::from_maps(
                format!("{city}-{orders}"),
                "2025-01".parse().unwrap(),
                branch,
                orders,
                &stock,
                &predicted,
                &[],
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn classification_matches_the_ratio(stock in 0i64..100_000, predicted in 1i64..100_000) {
        let ratio = stock as f64 / predicted as f64;
        let status = classify(stock, predicted);
        // Skip ratios within float noise of a boundary; those are pinned by unit tests.
        prop_assume!((ratio - 0.8).abs() > 1e-9 && (ratio - 1.2).abs() > 1e-9);
        let expected = if ratio < 0.8 {
            StockStatus::Shortage
        } else if ratio > 1.2 {
            StockStatus::Surplus
        } else {
            StockStatus::Normal
        };
        prop_assert_eq!(status, expected);
    }

    #[test]
    fn exact_boundaries_are_normal(predicted in 1i64..10_000) {
        prop_assert_eq!(classify(predicted * 4, predicted * 5), StockStatus::Normal);
        prop_assert_eq!(classify(predicted * 6, predicted * 5), StockStatus::Normal);
    }

    #[test]
    fn filtering_twice_changes_nothing(
        records in prop::collection::vec(record_strategy(), 0..12),
        status in prop::sample::select(StockStatus::ALL.to_vec()),
    ) {
        let filter = MonitoringFilter { status: Some(status), ..Default::default() };
        let once = filter.apply(&records);
        prop_assert_eq!(filter.apply(&once), once.clone());
        prop_assert!(once.iter().all(|r| r.status() == status));
    }

    #[test]
    fn empty_filter_is_identity(records in prop::collection::vec(record_strategy(), 0..12)) {
        prop_assert_eq!(MonitoringFilter::default().apply(&records), records);
    }

    #[test]
    fn donut_slices_sum_to_product_lines(records in prop::collection::vec(record_strategy(), 0..12)) {
        let lines: usize = records.iter().map(|r| r.products.len()).sum();
        let counted: usize = charts::status_counts(&records).iter().map(|c| c.count).sum();
        prop_assert_eq!(counted, lines);
    }
}

#[test]
fn fixture_records_survive_an_empty_filter() {
    let records = branch_snapshots();
    assert_eq!(MonitoringFilter::default().apply(&records).len(), records.len());
}
