use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum MainCategory {
    #[serde(rename = "전문의약품")]
    Prescription,
    #[serde(rename = "일반의약품")]
    OverTheCounter,
    #[serde(rename = "의약외품")]
    QuasiDrug,
}

impl MainCategory {
    pub const ALL: [MainCategory; 3] = [
        MainCategory::Prescription,
        MainCategory::OverTheCounter,
        MainCategory::QuasiDrug,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MainCategory::Prescription => "전문의약품",
            MainCategory::OverTheCounter => "일반의약품",
            MainCategory::QuasiDrug => "의약외품",
        }
    }

    /// Subcategories accepted under this main category.
    pub fn sub_categories(self) -> &'static [&'static str] {
        match self {
            MainCategory::Prescription => &[
                "항생제",
                "고혈압 치료제",
                "당뇨병 치료제",
                "진통·소염제",
                "정신신경용제",
                "항암제",
                "기타",
            ],
            MainCategory::OverTheCounter => &[
                "감기약",
                "소화제",
                "해열진통제",
                "지사제",
                "외용제",
                "멀미약",
                "기타",
            ],
            MainCategory::QuasiDrug => &[
                "마스크",
                "손소독제",
                "밴드·반창고",
                "체온계",
                "구강청결제",
                "방역용품",
                "기타",
            ],
        }
    }

    pub fn accepts(self, sub_category: &str) -> bool {
        self.sub_categories().contains(&sub_category)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub product_code: String,
    pub manufacturer: String,
    pub main_category: MainCategory,
    pub sub_category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub unit: String,
    pub unit_price: i64,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub is_narcotic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_img_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subcategories_belong_to_one_main_category() {
        assert!(MainCategory::OverTheCounter.accepts("감기약"));
        assert!(!MainCategory::Prescription.accepts("감기약"));
        assert!(MainCategory::ALL.iter().all(|c| c.accepts("기타")));
    }
}
