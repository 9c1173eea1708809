use std::str::FromStr;

use serde::Serialize;
use utoipa::ToSchema;

use super::{BranchSnapshot, StockStatus};
use crate::period::MonthRange;

/// Region picked in the province/city cascader, e.g. `충남충북/천안`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionPath {
    segments: Vec<String>,
}

impl RegionPath {
    pub fn new<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments
            .into_iter()
            .map(Into::into)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    /// Deepest selected segment; branches are matched on this.
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("region path is empty")]
pub struct EmptyRegion;

impl FromStr for RegionPath {
    type Err = EmptyRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegionPath::new(s.split(['/', '>'])).ok_or(EmptyRegion)
    }
}

/// Node of the region tree offered by the dashboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Region {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[schema(no_recursion)]
    pub children: Vec<Region>,
}

/// Dashboard search form. Every absent criterion matches all records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitoringFilter {
    pub months: Option<MonthRange>,
    pub region: Option<RegionPath>,
    pub status: Option<StockStatus>,
}

impl MonitoringFilter {
    pub fn is_empty(&self) -> bool {
        self.months.is_none() && self.region.is_none() && self.status.is_none()
    }

    pub fn matches(&self, snapshot: &BranchSnapshot) -> bool {
        let in_range = self
            .months
            .as_ref()
            .is_none_or(|range| range.contains(snapshot.month));
        let in_region = self
            .region
            .as_ref()
            .is_none_or(|region| snapshot.branch.contains(region.leaf()));
        let has_status = self
            .status
            .is_none_or(|status| snapshot.status() == status);
        in_range && in_region && has_status
    }

    /// Records that pass every criterion, in their original order.
    pub fn apply(&self, records: &[BranchSnapshot]) -> Vec<BranchSnapshot> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_leaf_is_the_deepest_segment() {
        let path: RegionPath = "충남충북/천안".parse().unwrap();
        assert_eq!(path.leaf(), "천안");
        let province: RegionPath = "충남충북".parse().unwrap();
        assert_eq!(province.leaf(), "충남충북");
        assert!(" / ".parse::<RegionPath>().is_err());
    }
}
