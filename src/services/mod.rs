//! Business logic services

pub mod activities;
pub mod assets;
pub mod cache;
pub mod directory;
pub mod reports;

use std::sync::Arc;

use crate::{
    config::PaginationConfig,
    repository::{AssetSource, DirectorySource},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub cache: cache::AssetCache,
    pub activities: activities::ActivitiesService,
    pub assets: assets::AssetsService,
    pub reports: reports::ReportsService,
    pub directory: directory::DirectoryService,
}

impl Services {
    /// Create all services on top of the asset API sources
    pub fn new(
        source: Arc<dyn AssetSource>,
        directory: Arc<dyn DirectorySource>,
        pagination: &PaginationConfig,
    ) -> Self {
        let cache = cache::AssetCache::new(source.clone());
        Self {
            activities: activities::ActivitiesService::new(cache.clone(), pagination.recent_limit),
            assets: assets::AssetsService::new(source, cache.clone()),
            reports: reports::ReportsService::new(cache.clone()),
            directory: directory::DirectoryService::new(directory),
            cache,
        }
    }
}
