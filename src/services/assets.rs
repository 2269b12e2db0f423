//! Inventory service: list views over the cached snapshot and mutations
//! forwarded to the asset API

use std::sync::Arc;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{Asset, InventoryOverview},
    pipeline::{clamp_page, filter_assets, maintenance_assets, page_count, paginate, AssetCriteria, Page},
    repository::{AssetSource, Credentials},
};

use super::cache::AssetCache;

#[derive(Clone)]
pub struct AssetsService {
    source: Arc<dyn AssetSource>,
    cache: AssetCache,
}

impl AssetsService {
    pub fn new(source: Arc<dyn AssetSource>, cache: AssetCache) -> Self {
        Self { source, cache }
    }

    /// Inventory list, filtered and paginated
    pub async fn list(
        &self,
        credentials: &Credentials,
        criteria: &AssetCriteria,
        page: usize,
        per_page: usize,
    ) -> AppResult<Page<Asset>> {
        let assets = self.cache.get(credentials).await?;
        let filtered = filter_assets(&assets, criteria);
        let page = clamp_page(page, page_count(filtered.len(), per_page));
        Ok(paginate(&filtered, page, per_page))
    }

    /// Assets currently in maintenance
    pub async fn maintenance(&self, credentials: &Credentials, search: Option<&str>) -> AppResult<Vec<Asset>> {
        let assets = self.cache.get(credentials).await?;
        Ok(maintenance_assets(&assets, search))
    }

    pub async fn overview(&self, credentials: &Credentials) -> AppResult<InventoryOverview> {
        self.source.inventory_overview(credentials).await
    }

    /// Create an asset through the asset API
    pub async fn create(&self, credentials: &Credentials, asset: &Asset) -> AppResult<Option<Asset>> {
        asset.validate()?;
        let created = self.source.create_asset(credentials, asset).await?;
        self.cache.invalidate().await;
        tracing::info!("Asset '{}' created", asset.asset_name);
        Ok(created)
    }

    /// Replace an asset through the asset API
    pub async fn update(&self, credentials: &Credentials, id: &str, asset: &Asset) -> AppResult<Option<Asset>> {
        asset.validate()?;
        let updated = self.source.update_asset(credentials, id, asset).await?;
        self.cache.invalidate().await;
        tracing::info!("Asset {} updated", id);
        Ok(updated)
    }

    /// Refill the cache from the asset API, returning the asset count
    pub async fn refresh(&self, credentials: &Credentials) -> AppResult<usize> {
        Ok(self.cache.refetch(credentials).await?.len())
    }
}
