//! Report summary models

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

/// Count for one label of a distribution
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DistributionEntry {
    pub label: String,
    pub value: i64,
}

/// Summed purchase value for one label
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ValueEntry {
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub value: Decimal,
}

/// Chart data behind the reports page
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Number of assets matching the report filters
    pub total: i64,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_value: Decimal,
    pub by_status: Vec<DistributionEntry>,
    pub by_asset_type: Vec<DistributionEntry>,
    pub by_department: Vec<DistributionEntry>,
    pub value_by_asset_type: Vec<ValueEntry>,
}
