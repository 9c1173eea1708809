//! Sample branch data the monitoring dashboard runs on until the backend
//! exposes per-branch forecasts.

use super::{BranchSnapshot, filter::Region};
use crate::period::YearMonth;

struct Sample {
    key: &'static str,
    month: YearMonth,
    branch: &'static str,
    orders: u32,
    stock: &'static [(&'static str, i64)],
    predicted: &'static [(&'static str, i64)],
    recommended: &'static [(&'static str, i64)],
}

const SAMPLES: &[Sample] = &[
    Sample {
        key: "1",
        month: YearMonth::from_parts(2025, 1),
        branch: "대전서구점",
        orders: 368,
        stock: &[
            ("타이레놀", 27),
            ("펜잘큐", 98),
            ("어린이부루펜", 83),
            ("케토톱", 98),
            ("부루펜", 42),
            ("지르텍", 97),
            ("인사돌", 62),
            ("겔포스", 81),
            ("활명수", 86),
            ("모드나폴", 93),
        ],
        predicted: &[
            ("타이레놀", 70),
            ("펜잘큐", 35),
            ("어린이부루펜", 72),
            ("케토톱", 57),
            ("부루펜", 116),
            ("지르텍", 91),
            ("인사돌", 93),
            ("겔포스", 66),
            ("활명수", 72),
            ("모드나폴", 74),
        ],
        recommended: &[
            ("타이레놀", 43),
            ("펜잘큐", 0),
            ("어린이부루펜", 0),
            ("케토톱", 0),
            ("부루펜", 74),
            ("지르텍", 0),
            ("인사돌", 31),
            ("겔포스", 0),
            ("활명수", 0),
            ("모드나폴", 0),
        ],
    },
    Sample {
        key: "2",
        month: YearMonth::from_parts(2025, 1),
        branch: "천안불당점",
        orders: 290,
        stock: &[
            ("타이레놀", 26),
            ("펜잘큐", 53),
            ("어린이부루펜", 9),
            ("케토톱", 57),
            ("부루펜", 60),
            ("지르텍", 9),
            ("인사돌", 68),
            ("겔포스", 97),
            ("활명수", 85),
            ("모드나폴", 29),
        ],
        predicted: &[
            ("타이레놀", 44),
            ("펜잘큐", 41),
            ("어린이부루펜", 95),
            ("케토톱", 66),
            ("부루펜", 45),
            ("지르텍", 63),
            ("인사돌", 74),
            ("겔포스", 91),
            ("활명수", 35),
            ("모드나폴", 79),
        ],
        recommended: &[
            ("타이레놀", 18),
            ("펜잘큐", 0),
            ("어린이부루펜", 86),
            ("케토톱", 9),
            ("부루펜", 0),
            ("지르텍", 54),
            ("인사돌", 6),
            ("겔포스", 0),
            ("활명수", 0),
            ("모드나폴", 50),
        ],
    },
    Sample {
        key: "3",
        month: YearMonth::from_parts(2025, 1),
        branch: "청주오창점",
        orders: 169,
        stock: &[
            ("타이레놀", 94),
            ("펜잘큐", 15),
            ("어린이부루펜", 21),
            ("케토톱", 56),
            ("부루펜", 90),
            ("지르텍", 41),
            ("인사돌", 47),
            ("겔포스", 46),
            ("활명수", 29),
            ("모드나폴", 90),
        ],
        predicted: &[
            ("타이레놀", 69),
            ("펜잘큐", 92),
            ("어린이부루펜", 73),
            ("케토톱", 42),
            ("부루펜", 71),
            ("지르텍", 53),
            ("인사돌", 99),
            ("겔포스", 74),
            ("활명수", 102),
            ("모드나폴", 32),
        ],
        recommended: &[
            ("타이레놀", 0),
            ("펜잘큐", 77),
            ("어린이부루펜", 52),
            ("케토톱", 0),
            ("부루펜", 0),
            ("지르텍", 12),
            ("인사돌", 52),
            ("겔포스", 28),
            ("활명수", 73),
            ("모드나폴", 0),
        ],
    },
    Sample {
        key: "4",
        month: YearMonth::from_parts(2025, 1),
        branch: "대전탄방점",
        orders: 295,
        stock: &[
            ("타이레놀", 60),
            ("펜잘큐", 97),
            ("어린이부루펜", 36),
            ("케토톱", 32),
            ("부루펜", 85),
            ("지르텍", 58),
            ("인사돌", 12),
            ("겔포스", 77),
            ("활명수", 10),
            ("모드나폴", 59),
        ],
        predicted: &[
            ("타이레놀", 107),
            ("펜잘큐", 93),
            ("어린이부루펜", 91),
            ("케토톱", 110),
            ("부루펜", 97),
            ("지르텍", 63),
            ("인사돌", 119),
            ("겔포스", 91),
            ("활명수", 120),
            ("모드나폴", 101),
        ],
        recommended: &[
            ("타이레놀", 47),
            ("펜잘큐", 0),
            ("어린이부루펜", 55),
            ("케토톱", 78),
            ("부루펜", 12),
            ("지르텍", 5),
            ("인사돌", 107),
            ("겔포스", 14),
            ("활명수", 110),
            ("모드나폴", 42),
        ],
    },
    Sample {
        key: "5",
        month: YearMonth::from_parts(2025, 2),
        branch: "청주흥덕점",
        orders: 291,
        stock: &[
            ("타이레놀", 32),
            ("펜잘큐", 83),
            ("어린이부루펜", 15),
            ("케토톱", 52),
            ("부루펜", 31),
            ("지르텍", 31),
            ("인사돌", 31),
            ("겔포스", 97),
            ("활명수", 94),
            ("모드나폴", 5),
        ],
        predicted: &[
            ("타이레놀", 45),
            ("펜잘큐", 100),
            ("어린이부루펜", 75),
            ("케토톱", 81),
            ("부루펜", 107),
            ("지르텍", 52),
            ("인사돌", 71),
            ("겔포스", 88),
            ("활명수", 104),
            ("모드나폴", 106),
        ],
        recommended: &[
            ("타이레놀", 13),
            ("펜잘큐", 17),
            ("어린이부루펜", 60),
            ("케토톱", 29),
            ("부루펜", 76),
            ("지르텍", 21),
            ("인사돌", 40),
            ("겔포스", 0),
            ("활명수", 10),
            ("모드나폴", 101),
        ],
    },
    Sample {
        key: "6",
        month: YearMonth::from_parts(2025, 2),
        branch: "대전둔산점",
        orders: 361,
        stock: &[
            ("타이레놀", 87),
            ("펜잘큐", 8),
            ("어린이부루펜", 5),
            ("케토톱", 9),
            ("부루펜", 43),
            ("지르텍", 59),
            ("인사돌", 1),
            ("겔포스", 62),
            ("활명수", 11),
            ("모드나폴", 15),
        ],
        predicted: &[
            ("타이레놀", 118),
            ("펜잘큐", 35),
            ("어린이부루펜", 32),
            ("케토톱", 42),
            ("부루펜", 46),
            ("지르텍", 95),
            ("인사돌", 49),
            ("겔포스", 65),
            ("활명수", 31),
            ("모드나폴", 84),
        ],
        recommended: &[
            ("타이레놀", 31),
            ("펜잘큐", 27),
            ("어린이부루펜", 27),
            ("케토톱", 33),
            ("부루펜", 3),
            ("지르텍", 36),
            ("인사돌", 48),
            ("겔포스", 3),
            ("활명수", 20),
            ("모드나폴", 69),
        ],
    },
    Sample {
        key: "7",
        month: YearMonth::from_parts(2025, 1),
        branch: "천안쌍용점",
        orders: 263,
        stock: &[
            ("타이레놀", 45),
            ("펜잘큐", 42),
            ("어린이부루펜", 70),
            ("케토톱", 60),
            ("부루펜", 48),
            ("지르텍", 96),
            ("인사돌", 98),
            ("겔포스", 9),
            ("활명수", 60),
            ("모드나폴", 90),
        ],
        predicted: &[
            ("타이레놀", 71),
            ("펜잘큐", 120),
            ("어린이부루펜", 109),
            ("케토톱", 70),
            ("부루펜", 76),
            ("지르텍", 97),
            ("인사돌", 65),
            ("겔포스", 65),
            ("활명수", 80),
            ("모드나폴", 101),
        ],
        recommended: &[
            ("타이레놀", 26),
            ("펜잘큐", 78),
            ("어린이부루펜", 39),
            ("케토톱", 10),
            ("부루펜", 28),
            ("지르텍", 1),
            ("인사돌", 0),
            ("겔포스", 56),
            ("활명수", 20),
            ("모드나폴", 11),
        ],
    },
];

pub fn branch_snapshots() -> Vec<BranchSnapshot> {
    SAMPLES
        .iter()
        .map(|s| {
            BranchSnapshot::from_maps(
                s.key,
                s.month,
                s.branch,
                s.orders,
                s.stock,
                s.predicted,
                s.recommended,
            )
        })
        .collect()
}

pub fn regions() -> Vec<Region> {
    vec![Region {
        name: "충남충북".into(),
        children: ["천안", "대전", "청주"]
            .into_iter()
            .map(|city| Region {
                name: city.into(),
                children: Vec::new(),
            })
            .collect(),
    }]
}
