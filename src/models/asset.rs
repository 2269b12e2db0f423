//! Asset model, as served by the external asset API.
//!
//! Every field is optional on input: the dashboard treats the upstream
//! collection as a best-effort snapshot and degrades missing data to empty
//! values rather than rejecting a record.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{serde_as, DefaultOnError};
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{AssetCondition, AssetStatus};

/// Assignment sub-record, populated by convention when status = assigned
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Assignment {
    #[serde_as(as = "DefaultOnError")]
    pub assigned_user: Option<String>,
    /// ISO 8601 date of the assignment
    #[serde_as(as = "DefaultOnError")]
    pub assignment_date: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub assignment_notes: Option<String>,
}

/// Asset record
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Asset {
    /// Identifier assigned by the external API (absent for new assets)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "DefaultOnError")]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "Asset type is required"))]
    #[serde_as(as = "DefaultOnError")]
    pub asset_type: String,
    #[validate(length(min = 1, message = "Asset name is required"))]
    #[serde_as(as = "DefaultOnError")]
    pub asset_name: String,
    #[serde_as(as = "DefaultOnError")]
    pub serial_number: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub manufacturer: String,
    #[serde_as(as = "DefaultOnError")]
    pub model: String,
    #[serde_as(as = "DefaultOnError")]
    pub purchase_date: Option<String>,
    /// Warranty length; the API accepts either a number or a string
    #[schema(value_type = Option<Object>)]
    pub warranty: Option<serde_json::Value>,
    #[serde_as(as = "DefaultOnError")]
    pub status: AssetStatus,
    #[serde_as(as = "DefaultOnError")]
    pub location: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub department: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub notes: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub trackable: bool,
    /// Purchase value
    #[serde(
        deserialize_with = "lenient_decimal",
        serialize_with = "rust_decimal::serde::float_option::serialize"
    )]
    #[schema(value_type = Option<f64>)]
    pub value: Option<Decimal>,
    #[serde_as(as = "DefaultOnError")]
    pub condition: AssetCondition,
    #[serde_as(as = "DefaultOnError")]
    pub ip_address: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub mac_address: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub subnet_mask: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub gateway: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub is_dhcp: bool,
    #[serde_as(as = "DefaultOnError")]
    pub images: Vec<String>,
    #[serde_as(as = "DefaultOnError")]
    pub assignment: Option<Assignment>,
    #[serde_as(as = "DefaultOnError")]
    pub assigned_by: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub assigned_by_id: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub created_at: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub updated_at: Option<String>,
}

impl Asset {
    /// Name of the user the asset is assigned to, if any
    pub fn assigned_user(&self) -> Option<&str> {
        self.assignment
            .as_ref()
            .and_then(|a| a.assigned_user.as_deref())
    }
}

/// Accept a decimal sent as a JSON number, a numeric string, an empty
/// string or null. Anything unparseable becomes `None`.
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let parsed = match raw {
        Some(serde_json::Value::Number(n)) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        Some(serde_json::Value::String(s)) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    };
    Ok(parsed)
}

/// One bucket of the upstream inventory overview aggregation
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CountBucket {
    #[serde(rename = "_id", default)]
    #[serde_as(as = "DefaultOnError")]
    pub id: Option<String>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnError")]
    pub count: i64,
}

/// Aggregated inventory overview computed by the external API
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryOverview {
    #[serde_as(as = "DefaultOnError")]
    pub by_status: Vec<CountBucket>,
    #[serde_as(as = "DefaultOnError")]
    pub by_department: Vec<CountBucket>,
    #[serde_as(as = "DefaultOnError")]
    pub by_location: Vec<CountBucket>,
    #[serde_as(as = "DefaultOnError")]
    pub by_asset_type: Vec<CountBucket>,
    #[serde_as(as = "DefaultOnError")]
    pub total_value: f64,
}
