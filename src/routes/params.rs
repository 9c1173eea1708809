use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppError,
    monitoring::{MonitoringFilter, RegionPath, StockStatus},
    period::MonthRange,
};

/// Search form of the stock monitoring dashboard.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MonitoringQuery {
    /// First month, `YYYY-MM`
    pub from: Option<String>,
    /// Last month, `YYYY-MM`
    pub to: Option<String>,
    /// `<province>/<city>`
    pub region: Option<String>,
    /// `SHORTAGE`, `NORMAL`, `SURPLUS` or the Korean label
    pub status: Option<String>,
}

impl TryFrom<MonitoringQuery> for MonitoringFilter {
    type Error = AppError;

    fn try_from(query: MonitoringQuery) -> Result<Self, Self::Error> {
        let months = MonthRange::from_query(non_blank(&query.from), non_blank(&query.to))?;
        let region = non_blank(&query.region)
            .map(str::parse::<RegionPath>)
            .transpose()?;
        let status = non_blank(&query.status)
            .map(str::parse::<StockStatus>)
            .transpose()?;
        Ok(MonitoringFilter {
            months,
            region,
            status,
        })
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ForecastQuery {
    pub keyword: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SeriesQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl SeriesQuery {
    pub fn range(&self) -> Result<Option<MonthRange>, AppError> {
        Ok(MonthRange::from_query(non_blank(&self.from), non_blank(&self.to))?)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct BranchDashboardQuery {
    #[param(value_type = i64)]
    pub pharmacy_id: Option<String>,
}

impl BranchDashboardQuery {
    pub fn pharmacy_id(&self) -> Result<i64, AppError> {
        let raw = non_blank(&self.pharmacy_id)
            .ok_or_else(|| AppError::BadRequest("pharmacyId is required".into()))?;
        raw.parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid pharmacyId: {raw}")))
    }
}

// Empty form fields arrive as `?from=`; treat them as absent.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_ignored() {
        let query = MonitoringQuery {
            from: Some(String::new()),
            to: Some(" ".into()),
            region: None,
            status: Some(String::new()),
        };
        let filter = MonitoringFilter::try_from(query).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn korean_status_label_is_accepted() {
        let query = MonitoringQuery {
            status: Some("부족".into()),
            ..Default::default()
        };
        let filter = MonitoringFilter::try_from(query).unwrap();
        assert_eq!(filter.status, Some(StockStatus::Shortage));
    }

    #[test]
    fn pharmacy_id_must_be_a_number() {
        let query = |raw: Option<&str>| BranchDashboardQuery {
            pharmacy_id: raw.map(str::to_string),
        };
        assert_eq!(query(Some(" 4 ")).pharmacy_id().unwrap(), 4);
        assert!(matches!(
            query(Some("abc")).pharmacy_id(),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(query(None).pharmacy_id(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn reversed_range_is_a_bad_request() {
        let query = MonitoringQuery {
            from: Some("2025-03".into()),
            to: Some("2025-01".into()),
            ..Default::default()
        };
        let err = MonitoringFilter::try_from(query).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
