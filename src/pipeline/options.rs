//! Dropdown options for the activity filters

use indexmap::IndexSet;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Activity;

/// Distinct values present in the activity log, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub asset_types: Vec<String>,
    pub departments: Vec<String>,
    pub locations: Vec<String>,
}

pub fn filter_options(activities: &[Activity]) -> FilterOptions {
    FilterOptions {
        asset_types: distinct(activities.iter().map(|a| a.asset_type.as_str())),
        departments: distinct(activities.iter().map(|a| a.department.as_str())),
        locations: distinct(activities.iter().map(|a| a.location.as_str())),
    }
}

/// Distinct non-blank values, first occurrence wins
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|value| !value.trim().is_empty())
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Asset, AssetStatus};
    use crate::pipeline::derive_activities;

    #[test]
    fn test_filter_options_first_seen_order() {
        let assets = vec![
            Asset {
                id: Some("1".into()),
                asset_type: "server".into(),
                department: Some("IT".into()),
                location: Some("Datacenter".into()),
                status: AssetStatus::Maintenance,
                created_at: Some("2024-01-01".into()),
                updated_at: Some("2024-01-02".into()),
                ..Default::default()
            },
            Asset {
                id: Some("2".into()),
                asset_type: "laptop".into(),
                department: None,
                location: Some("HQ".into()),
                created_at: Some("2023-01-01".into()),
                ..Default::default()
            },
        ];

        let options = filter_options(&derive_activities(&assets));
        assert_eq!(options.asset_types, vec!["server", "laptop"]);
        assert_eq!(options.departments, vec!["IT"]);
        assert_eq!(options.locations, vec!["Datacenter", "HQ"]);
    }
}
