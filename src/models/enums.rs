//! Shared domain enums (wire values match the external asset API)

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// AssetStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    #[default]
    Available,
    Assigned,
    Maintenance,
    Reserved,
    Returned,
    /// Any value the API sends that this server does not know about
    #[serde(other)]
    Unknown,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Available => "available",
            AssetStatus::Assigned => "assigned",
            AssetStatus::Maintenance => "maintenance",
            AssetStatus::Reserved => "reserved",
            AssetStatus::Returned => "returned",
            AssetStatus::Unknown => "unknown",
        }
    }
}

impl FromStr for AssetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(AssetStatus::Available),
            "assigned" => Ok(AssetStatus::Assigned),
            "maintenance" => Ok(AssetStatus::Maintenance),
            "reserved" => Ok(AssetStatus::Reserved),
            "returned" => Ok(AssetStatus::Returned),
            other => Err(format!("unknown asset status '{}'", other)),
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssetCondition
// ---------------------------------------------------------------------------

/// Physical condition of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssetCondition {
    New,
    #[default]
    Good,
    Fair,
    Poor,
}

impl AssetCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCondition::New => "new",
            AssetCondition::Good => "good",
            AssetCondition::Fair => "fair",
            AssetCondition::Poor => "poor",
        }
    }
}

impl FromStr for AssetCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(AssetCondition::New),
            "good" => Ok(AssetCondition::Good),
            "fair" => Ok(AssetCondition::Fair),
            "poor" => Ok(AssetCondition::Poor),
            other => Err(format!("unknown asset condition '{}'", other)),
        }
    }
}

impl std::fmt::Display for AssetCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActionType
// ---------------------------------------------------------------------------

/// Kind of event recorded in the activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Added,
    Assigned,
    Maintenance,
    Reserved,
    Returned,
    /// Declared by the activity log contract, never derived from asset state
    Updated,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Added => "added",
            ActionType::Assigned => "assigned",
            ActionType::Maintenance => "maintenance",
            ActionType::Reserved => "reserved",
            ActionType::Returned => "returned",
            ActionType::Updated => "updated",
        }
    }
}

impl FromStr for ActionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "added" => Ok(ActionType::Added),
            "assigned" => Ok(ActionType::Assigned),
            "maintenance" => Ok(ActionType::Maintenance),
            "reserved" => Ok(ActionType::Reserved),
            "returned" => Ok(ActionType::Returned),
            "updated" => Ok(ActionType::Updated),
            other => Err(format!("unknown action type '{}'", other)),
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_deserializes() {
        let status: AssetStatus = serde_json::from_str("\"retired\"").unwrap();
        assert_eq!(status, AssetStatus::Unknown);
    }

    #[test]
    fn test_action_type_parse() {
        assert_eq!("Maintenance".parse::<ActionType>(), Ok(ActionType::Maintenance));
        assert!("deleted".parse::<ActionType>().is_err());
    }
}
