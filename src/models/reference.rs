//! Reference lists: asset categories, departments and locations

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError};
use utoipa::ToSchema;
use validator::Validate;

/// Which reference list an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Category,
    Department,
    Location,
}

impl ReferenceKind {
    /// Collection path on the asset API
    pub fn path(&self) -> &'static str {
        match self {
            ReferenceKind::Category => "/category",
            ReferenceKind::Department => "/department",
            ReferenceKind::Location => "/location",
        }
    }
}

impl std::str::FromStr for ReferenceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "category" | "categories" => Ok(ReferenceKind::Category),
            "department" | "departments" => Ok(ReferenceKind::Department),
            "location" | "locations" => Ok(ReferenceKind::Location),
            other => Err(format!("unknown reference list '{}'", other)),
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path().trim_start_matches('/'))
    }
}

/// One category, department or location
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "DefaultOnError")]
    pub id: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub name: String,
    #[serde_as(as = "DefaultOnError")]
    pub created_at: Option<String>,
    /// Number of assets, only present on the dashboard category counts
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "DefaultOnError")]
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewReference {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
}

impl NewReference {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
        }
    }
}
