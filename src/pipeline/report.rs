//! Report chart aggregation

use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::models::{Asset, DistributionEntry, ReportSummary, ValueEntry};

/// Aggregate the (already filtered) report assets into chart series.
///
/// Series keep the order in which labels first appear. Labels are
/// capitalized, departments are shown uppercased and assets without a
/// department are left out of that series.
pub fn summarize(assets: &[Asset]) -> ReportSummary {
    let mut by_status: IndexMap<String, i64> = IndexMap::new();
    let mut by_asset_type: IndexMap<String, i64> = IndexMap::new();
    let mut by_department: IndexMap<String, i64> = IndexMap::new();
    let mut value_by_asset_type: IndexMap<String, Decimal> = IndexMap::new();
    let mut total_value = Decimal::ZERO;

    for asset in assets {
        *by_status.entry(asset.status.as_str().to_string()).or_default() += 1;
        *by_asset_type.entry(asset.asset_type.clone()).or_default() += 1;
        if let Some(department) = &asset.department {
            *by_department.entry(department.clone()).or_default() += 1;
        }
        let value = asset.value.unwrap_or_default();
        *value_by_asset_type.entry(asset.asset_type.clone()).or_default() += value;
        total_value += value;
    }

    ReportSummary {
        total: assets.len() as i64,
        total_value,
        by_status: counts(by_status, capitalize),
        by_asset_type: counts(by_asset_type, capitalize),
        by_department: counts(by_department, |label| label.to_uppercase()),
        value_by_asset_type: value_by_asset_type
            .into_iter()
            .map(|(label, value)| ValueEntry {
                label: capitalize(&label),
                value,
            })
            .collect(),
    }
}

fn counts(series: IndexMap<String, i64>, label: impl Fn(&str) -> String) -> Vec<DistributionEntry> {
    series
        .into_iter()
        .map(|(name, value)| DistributionEntry {
            label: label(&name),
            value,
        })
        .collect()
}

/// Uppercase the first character
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetStatus;

    fn asset(asset_type: &str, status: AssetStatus, department: Option<&str>, value: &str) -> Asset {
        Asset {
            asset_type: asset_type.to_string(),
            status,
            department: department.map(str::to_string),
            value: value.parse().ok(),
            ..Default::default()
        }
    }

    #[test]
    fn test_summarize() {
        let assets = vec![
            asset("laptop", AssetStatus::Assigned, Some("marketing"), "1200.50"),
            asset("printer", AssetStatus::Maintenance, None, "300"),
            asset("laptop", AssetStatus::Available, Some("it"), ""),
            asset("laptop", AssetStatus::Assigned, Some("marketing"), "999.50"),
        ];

        let summary = summarize(&assets);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.total_value, "2500.00".parse::<Decimal>().unwrap());

        let status: Vec<_> = summary.by_status.iter().map(|e| (e.label.as_str(), e.value)).collect();
        assert_eq!(status, vec![("Assigned", 2), ("Maintenance", 1), ("Available", 1)]);

        let departments: Vec<_> = summary.by_department.iter().map(|e| (e.label.as_str(), e.value)).collect();
        assert_eq!(departments, vec![("MARKETING", 2), ("IT", 1)]);

        assert_eq!(summary.value_by_asset_type[0].label, "Laptop");
        assert_eq!(summary.value_by_asset_type[0].value, "2200.00".parse::<Decimal>().unwrap());
        assert_eq!(summary.value_by_asset_type[1].value, "300".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("laptop"), "Laptop");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }
}
