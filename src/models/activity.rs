//! Activity log entry, derived from asset state (never persisted)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::ActionType;

/// One inferred lifecycle event for one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Key derived from the asset id and action type
    pub id: String,
    pub asset_id: String,
    pub asset_type: String,
    pub asset_name: String,
    pub serial_number: String,
    pub action_type: ActionType,
    /// Actor associated with the event
    pub user: String,
    pub department: String,
    pub location: String,
    /// Raw timestamp copied from the asset; may be empty or unparseable
    pub timestamp: String,
    pub notes: String,
    pub performed_by: String,
}
