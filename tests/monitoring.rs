use yeahyak_portal::{
    monitoring::{
        MonitoringFilter, MonitoringReport, RegionPath, StockStatus, charts,
        fixtures::branch_snapshots,
    },
    period::MonthRange,
};

fn january() -> MonthRange {
    MonthRange::new("2025-01".parse().unwrap(), "2025-01".parse().unwrap()).unwrap()
}

#[test]
fn branch_status_follows_branch_totals() {
    let records = branch_snapshots();
    let seogu = &records[0];
    assert_eq!(seogu.branch, "대전서구점");
    assert_eq!(seogu.total_stock(), 767);
    assert_eq!(seogu.total_predicted(), 746);
    assert_eq!(seogu.total_recommended(), 148);
    assert_eq!(seogu.status(), StockStatus::Normal);

    let shortages = records
        .iter()
        .filter(|r| r.status() == StockStatus::Shortage)
        .count();
    assert_eq!(shortages, 6);
}

#[test]
fn empty_filter_keeps_every_record_in_order() {
    let records = branch_snapshots();
    let filtered = MonitoringFilter::default().apply(&records);
    assert_eq!(filtered, records);
}

#[test]
fn month_range_is_inclusive() {
    let records = branch_snapshots();
    let filter = MonitoringFilter {
        months: Some(january()),
        ..Default::default()
    };
    let keys: Vec<_> = filter.apply(&records).into_iter().map(|r| r.key).collect();
    assert_eq!(keys, ["1", "2", "3", "4", "7"]);
}

#[test]
fn region_matches_on_the_city() {
    let records = branch_snapshots();
    let filter = MonitoringFilter {
        region: Some("충남충북/대전".parse::<RegionPath>().unwrap()),
        ..Default::default()
    };
    let branches: Vec<_> = filter
        .apply(&records)
        .into_iter()
        .map(|r| r.branch)
        .collect();
    assert_eq!(branches, ["대전서구점", "대전탄방점", "대전둔산점"]);
}

#[test]
fn filters_combine_and_reapply_idempotently() {
    let records = branch_snapshots();
    let filter = MonitoringFilter {
        months: Some(january()),
        region: Some("충남충북/대전".parse().unwrap()),
        status: Some(StockStatus::Shortage),
    };
    let once = filter.apply(&records);
    assert_eq!(once.len(), 1);
    assert_eq!(once[0].branch, "대전탄방점");
    assert_eq!(filter.apply(&once), once);
}

#[test]
fn normal_status_filter_returns_the_single_normal_branch() {
    let records = branch_snapshots();
    let filter = MonitoringFilter {
        status: Some(StockStatus::Normal),
        ..Default::default()
    };
    let filtered = filter.apply(&records);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].key, "1");
    assert!(
        MonitoringFilter {
            status: Some(StockStatus::Surplus),
            ..Default::default()
        }
        .apply(&records)
        .is_empty()
    );
}

#[test]
fn donut_counts_every_product_line() {
    let records = branch_snapshots();
    let counts = charts::status_counts(&records);
    let pairs: Vec<_> = counts.iter().map(|c| (c.status, c.count)).collect();
    assert_eq!(
        pairs,
        [
            (StockStatus::Shortage, 40),
            (StockStatus::Normal, 18),
            (StockStatus::Surplus, 12),
        ]
    );
    let lines: usize = records.iter().map(|r| r.products.len()).sum();
    assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), lines);
}

#[test]
fn product_totals_keep_first_seen_order() {
    let totals = charts::product_totals(&branch_snapshots());
    let names: Vec<_> = totals.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        ["타이레놀", "펜잘큐", "어린이부루펜", "케토톱", "부루펜", "지르텍", "인사돌", "겔포스", "활명수", "모드나폴"]
    );
    assert_eq!(totals[0].stock, 371);
    assert_eq!(totals[0].predicted, 524);
    assert_eq!(totals[0].recommended, 178);
}

#[test]
fn report_aggregates_only_the_filtered_records() {
    let records = branch_snapshots();
    let full = MonitoringReport::build(&records, &MonitoringFilter::default());
    assert_eq!(full.rows.len(), 7);
    assert_eq!(full.totals.branches, 7);
    assert_eq!(full.totals.orders, 2037);
    assert_eq!(full.totals.predicted, 5358);
    assert_eq!(full.totals.recommended, 2068);
    let orders: u64 = full.orders_by_branch.iter().map(|b| b.orders).sum();
    assert_eq!(orders, full.totals.orders);

    let empty = MonitoringReport::build(
        &records,
        &MonitoringFilter {
            status: Some(StockStatus::Surplus),
            ..Default::default()
        },
    );
    assert!(empty.rows.is_empty());
    assert!(empty.orders_by_branch.is_empty());
    assert_eq!(empty.totals, charts::Totals::default());
    assert!(empty.status_counts.iter().all(|c| c.count == 0));
}

#[test]
fn totals_card_counts_a_branch_once_across_months() {
    use yeahyak_portal::monitoring::BranchSnapshot;

    let records = [
        BranchSnapshot::from_maps(
            "1",
            "2025-01".parse().unwrap(),
            "천안불당점",
            120,
            &[("A", 10)],
            &[("A", 20)],
            &[("A", 5)],
        ),
        BranchSnapshot::from_maps(
            "2",
            "2025-02".parse().unwrap(),
            "천안불당점",
            80,
            &[("A", 30)],
            &[("A", 25)],
            &[("A", 0)],
        ),
        BranchSnapshot::from_maps(
            "3",
            "2025-02".parse().unwrap(),
            "청주오창점",
            40,
            &[("B", 7)],
            &[("B", 9)],
            &[("B", 2)],
        ),
    ];
    let totals = charts::totals(&records);
    assert_eq!(totals.branches, 2);
    assert_eq!(totals.orders, 240);
    assert_eq!(totals.predicted, 54);
    assert_eq!(totals.recommended, 7);
}

#[test]
fn detail_lists_each_product_with_its_own_status() {
    let records = branch_snapshots();
    let detail = records[0].detail();
    assert_eq!(detail.products.len(), 10);
    let tylenol = &detail.products[0];
    assert_eq!(tylenol.name, "타이레놀");
    assert_eq!((tylenol.stock, tylenol.predicted), (27, 70));
    assert_eq!(tylenol.status, StockStatus::Shortage);
}

#[test]
fn single_product_agrees_at_both_granularities() {
    use yeahyak_portal::monitoring::BranchSnapshot;

    let short = BranchSnapshot::from_maps(
        "a",
        "2025-01".parse().unwrap(),
        "천안불당점",
        1,
        &[("A", 10)],
        &[("A", 20)],
        &[],
    );
    assert_eq!(short.status(), StockStatus::Shortage);
    assert_eq!(short.detail().products[0].status, StockStatus::Shortage);

    let surplus = BranchSnapshot::from_maps(
        "b",
        "2025-01".parse().unwrap(),
        "천안불당점",
        1,
        &[("A", 30)],
        &[("A", 20)],
        &[],
    );
    assert_eq!(surplus.status(), StockStatus::Surplus);
    assert_eq!(surplus.detail().products[0].status, StockStatus::Surplus);
}
