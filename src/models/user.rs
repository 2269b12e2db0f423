//! Dashboard users, managed by the external asset API

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError};
use utoipa::ToSchema;
use validator::Validate;

/// User as returned by the asset API. Password hashes are never read.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "DefaultOnError")]
    pub id: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub name: String,
    #[serde_as(as = "DefaultOnError")]
    pub role: String,
    #[serde_as(as = "DefaultOnError")]
    pub location: String,
    #[serde_as(as = "DefaultOnError")]
    pub department: String,
    #[serde_as(as = "DefaultOnError")]
    pub added_by: Option<AddedBy>,
    #[serde_as(as = "DefaultOnError")]
    pub created_at: Option<String>,
}

/// Creator of a user: either an id or, when populated, the creating user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AddedBy {
    Id(String),
    User(Box<User>),
}

/// New user account
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
}

/// Changes to an existing user; the password is only sent when replaced
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    /// Taken from the route when updating through the REST API
    #[serde(rename = "_id", default)]
    #[validate(length(min = 1, message = "User id is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePassword {
    /// Current password
    #[validate(length(min = 1, message = "Current password is required"))]
    pub password: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

impl ChangePassword {
    /// Surrounding whitespace is not part of a password
    pub fn trimmed(&self) -> Self {
        Self {
            password: self.password.trim().to_string(),
            new_password: self.new_password.trim().to_string(),
        }
    }
}
