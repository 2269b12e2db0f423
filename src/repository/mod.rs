//! Access to the external asset API
//!
//! The external API owns persistence and authentication. This layer only
//! fetches collections and forwards mutations on behalf of a caller.

pub mod http;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{
        Asset, ChangePassword, InventoryOverview, NewReference, NewUser, ReferenceEntry,
        ReferenceKind, UpdateUser, User,
    },
};

pub use http::HttpAssetSource;

/// Bearer credentials forwarded to the external API
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Credentials {
    pub token: Option<String>,
}

impl Credentials {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

/// Asset collection and mutations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn list_assets(&self, credentials: &Credentials) -> AppResult<Vec<Asset>>;

    async fn inventory_overview(&self, credentials: &Credentials) -> AppResult<InventoryOverview>;

    async fn create_asset(&self, credentials: &Credentials, asset: &Asset) -> AppResult<Option<Asset>>;

    async fn update_asset(
        &self,
        credentials: &Credentials,
        id: &str,
        asset: &Asset,
    ) -> AppResult<Option<Asset>>;
}

/// Users and the category, department and location lists
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// The user the credentials belong to
    async fn current_user(&self, credentials: &Credentials) -> AppResult<Option<User>>;

    async fn list_users(&self, credentials: &Credentials) -> AppResult<Vec<User>>;

    async fn add_user(&self, credentials: &Credentials, user: &NewUser) -> AppResult<Option<User>>;

    async fn update_user(&self, credentials: &Credentials, user: &UpdateUser) -> AppResult<Option<User>>;

    async fn change_password(&self, credentials: &Credentials, change: &ChangePassword) -> AppResult<()>;

    async fn list_references(
        &self,
        credentials: &Credentials,
        kind: ReferenceKind,
    ) -> AppResult<Vec<ReferenceEntry>>;

    async fn create_reference(
        &self,
        credentials: &Credentials,
        kind: ReferenceKind,
        entry: &NewReference,
    ) -> AppResult<Option<ReferenceEntry>>;

    /// Categories with their asset counts, for the dashboard
    async fn asset_categories(&self, credentials: &Credentials) -> AppResult<Vec<ReferenceEntry>>;
}
