//! Report service

use crate::{
    error::AppResult,
    models::{Asset, ReportSummary},
    pipeline::{filter_report_assets, summarize, ReportCriteria},
    repository::Credentials,
};

use super::cache::AssetCache;

#[derive(Clone)]
pub struct ReportsService {
    cache: AssetCache,
}

impl ReportsService {
    pub fn new(cache: AssetCache) -> Self {
        Self { cache }
    }

    /// Assets shown in the report preview table
    pub async fn assets(&self, credentials: &Credentials, criteria: &ReportCriteria) -> AppResult<Vec<Asset>> {
        let assets = self.cache.get(credentials).await?;
        Ok(filter_report_assets(&assets, criteria))
    }

    /// Chart series for the filtered assets
    pub async fn summary(&self, credentials: &Credentials, criteria: &ReportCriteria) -> AppResult<ReportSummary> {
        let assets = self.assets(credentials, criteria).await?;
        Ok(summarize(&assets))
    }
}
