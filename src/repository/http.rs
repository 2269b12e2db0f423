//! reqwest implementation of [`AssetSource`] and [`DirectorySource`]

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use serde_with::{serde_as, VecSkipError};
use std::time::Duration;

use super::{AssetSource, Credentials, DirectorySource};
use crate::{
    config::UpstreamConfig,
    error::{AppError, AppResult},
    models::{
        Asset, ChangePassword, InventoryOverview, NewReference, NewUser, ReferenceEntry,
        ReferenceKind, UpdateUser, User,
    },
};

/// Every payload of the external API is wrapped in `{ "data": ... }`
#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

/// A collection where records that cannot be read at all are dropped
#[serde_as]
#[derive(Deserialize)]
#[serde(transparent, bound(deserialize = "T: Deserialize<'de>"))]
struct Records<T>(#[serde_as(as = "VecSkipError<_>")] Vec<T>);

/// HTTP client for the external asset API
#[derive(Clone)]
pub struct HttpAssetSource {
    client: reqwest::Client,
    base_url: String,
    service_token: Option<String>,
}

impl HttpAssetSource {
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            service_token: config.api_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the caller's token, or the service token when there is none
    fn authorize(&self, request: RequestBuilder, credentials: &Credentials) -> RequestBuilder {
        match credentials.token.as_deref().or(self.service_token.as_deref()) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        credentials: &Credentials,
    ) -> AppResult<Option<T>> {
        let response = self.authorize(request, credentials).send().await?;
        Self::parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(response: Response) -> AppResult<Option<T>> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    AppError::Authentication("Rejected by asset API".to_string())
                }
                StatusCode::NOT_FOUND => AppError::NotFound(body),
                _ => AppError::Upstream {
                    status: status.as_u16(),
                    message: body,
                },
            });
        }

        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    async fn fetch_list<T: DeserializeOwned>(&self, path: &str, credentials: &Credentials) -> AppResult<Vec<T>> {
        let records: Option<Records<T>> = self.send(self.client.get(self.url(path)), credentials).await?;
        Ok(records.map(|r| r.0).unwrap_or_default())
    }
}

#[async_trait]
impl AssetSource for HttpAssetSource {
    async fn list_assets(&self, credentials: &Credentials) -> AppResult<Vec<Asset>> {
        let assets: Vec<Asset> = self.fetch_list("/assets", credentials).await?;
        tracing::debug!("Fetched {} assets from asset API", assets.len());
        Ok(assets)
    }

    async fn inventory_overview(&self, credentials: &Credentials) -> AppResult<InventoryOverview> {
        let overview: Option<InventoryOverview> = self
            .send(self.client.get(self.url("/assets/inventory/overview")), credentials)
            .await?;
        Ok(overview.unwrap_or_default())
    }

    async fn create_asset(&self, credentials: &Credentials, asset: &Asset) -> AppResult<Option<Asset>> {
        self.send(self.client.post(self.url("/assets")).json(asset), credentials)
            .await
    }

    async fn update_asset(
        &self,
        credentials: &Credentials,
        id: &str,
        asset: &Asset,
    ) -> AppResult<Option<Asset>> {
        self.send(
            self.client.put(self.url(&format!("/assets/{}", id))).json(asset),
            credentials,
        )
        .await
    }
}

#[async_trait]
impl DirectorySource for HttpAssetSource {
    async fn current_user(&self, credentials: &Credentials) -> AppResult<Option<User>> {
        self.send(self.client.get(self.url("/user")), credentials).await
    }

    async fn list_users(&self, credentials: &Credentials) -> AppResult<Vec<User>> {
        self.fetch_list("/user/all", credentials).await
    }

    async fn add_user(&self, credentials: &Credentials, user: &NewUser) -> AppResult<Option<User>> {
        self.send(self.client.post(self.url("/user/add-user")).json(user), credentials)
            .await
    }

    async fn update_user(&self, credentials: &Credentials, user: &UpdateUser) -> AppResult<Option<User>> {
        self.send(self.client.post(self.url("/user/update-user")).json(user), credentials)
            .await
    }

    async fn change_password(&self, credentials: &Credentials, change: &ChangePassword) -> AppResult<()> {
        let _: Option<serde_json::Value> = self
            .send(
                self.client.post(self.url("/user/change-password")).json(change),
                credentials,
            )
            .await?;
        Ok(())
    }

    async fn list_references(
        &self,
        credentials: &Credentials,
        kind: ReferenceKind,
    ) -> AppResult<Vec<ReferenceEntry>> {
        let entries: Vec<ReferenceEntry> = self.fetch_list(kind.path(), credentials).await?;
        tracing::debug!("Fetched {} {} entries from asset API", entries.len(), kind);
        Ok(entries)
    }

    async fn create_reference(
        &self,
        credentials: &Credentials,
        kind: ReferenceKind,
        entry: &NewReference,
    ) -> AppResult<Option<ReferenceEntry>> {
        self.send(self.client.post(self.url(kind.path())).json(entry), credentials)
            .await
    }

    async fn asset_categories(&self, credentials: &Credentials) -> AppResult<Vec<ReferenceEntry>> {
        self.fetch_list("/dashboard/asset-category", credentials).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_null_data() {
        let envelope: Envelope<Vec<Asset>> = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_unreadable_records_are_skipped() {
        let envelope: Envelope<Records<Asset>> = serde_json::from_str(
            r#"{"data":[{"_id":"a1","assetName":"Laptop-01"},"garbage",42,{"_id":"a2","trackable":"yes"}]}"#,
        )
        .unwrap();
        let assets = envelope.data.unwrap().0;
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].asset_name, "Laptop-01");
        assert_eq!(assets[1].id.as_deref(), Some("a2"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let source = HttpAssetSource::new(&UpstreamConfig {
            base_url: "http://api.local/v1/".to_string(),
            api_token: None,
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(source.url("/assets"), "http://api.local/v1/assets");
    }
}
