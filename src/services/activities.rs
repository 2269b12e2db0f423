//! Activity log service

use crate::{
    error::AppResult,
    models::{Activity, Asset},
    pipeline::{
        clamp_page, derive_activities, filter_activities, filter_options, page_buttons, page_count,
        paginate, sort_activities, ActivityCriteria, FilterOptions, Page, PageButton, SortKey,
        SortOrder,
    },
    repository::Credentials,
};

use super::cache::AssetCache;

/// One request for the activity page
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityListRequest {
    pub criteria: ActivityCriteria,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    /// Requested 1-indexed page, clamped before slicing
    pub page: usize,
    pub per_page: usize,
}

/// Rendered activity page
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityListing {
    pub page: Page<Activity>,
    pub buttons: Vec<PageButton>,
    pub active_filters: usize,
}

#[derive(Clone)]
pub struct ActivitiesService {
    cache: AssetCache,
    recent_limit: usize,
}

impl ActivitiesService {
    pub fn new(cache: AssetCache, recent_limit: usize) -> Self {
        Self { cache, recent_limit }
    }

    /// Filtered, sorted and paginated activity log
    pub async fn list(
        &self,
        credentials: &Credentials,
        request: &ActivityListRequest,
    ) -> AppResult<ActivityListing> {
        let assets = self.cache.get(credentials).await?;
        let listing = build_listing(&assets, request);
        tracing::debug!(
            "Activity page {}/{}: {} of {} entries",
            listing.page.page,
            listing.page.total_pages,
            listing.page.items.len(),
            listing.page.total
        );
        Ok(listing)
    }

    /// Most recent activities, newest first
    pub async fn recent(&self, credentials: &Credentials, limit: Option<usize>) -> AppResult<Vec<Activity>> {
        let assets = self.cache.get(credentials).await?;
        let mut activities = derive_activities(&assets);
        activities.truncate(limit.unwrap_or(self.recent_limit));
        Ok(activities)
    }

    /// Values for the asset type, department and location dropdowns
    pub async fn options(&self, credentials: &Credentials) -> AppResult<FilterOptions> {
        let assets = self.cache.get(credentials).await?;
        Ok(filter_options(&derive_activities(&assets)))
    }
}

/// Run the whole activity pipeline over one snapshot
pub fn build_listing(assets: &[Asset], request: &ActivityListRequest) -> ActivityListing {
    let activities = derive_activities(assets);
    let filtered = filter_activities(&activities, &request.criteria);
    let sorted = sort_activities(&filtered, request.sort_key, request.sort_order);

    let total_pages = page_count(sorted.len(), request.per_page);
    let page = paginate(&sorted, clamp_page(request.page, total_pages), request.per_page);
    let buttons = page_buttons(page.page, page.total_pages);

    ActivityListing {
        page,
        buttons,
        active_filters: request.criteria.active_filter_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActionType, AssetStatus};
    use crate::repository::MockAssetSource;
    use std::sync::Arc;

    fn fleet(count: usize) -> Vec<Asset> {
        (0..count)
            .map(|i| Asset {
                id: Some(format!("asset-{}", i)),
                asset_type: "laptop".to_string(),
                asset_name: format!("Laptop-{:02}", i),
                status: if i % 2 == 0 {
                    AssetStatus::Maintenance
                } else {
                    AssetStatus::Available
                },
                created_at: Some(format!("2024-01-{:02}T00:00:00Z", i + 1)),
                updated_at: Some(format!("2024-02-{:02}T00:00:00Z", i + 1)),
                ..Default::default()
            })
            .collect()
    }

    fn request(page: usize) -> ActivityListRequest {
        ActivityListRequest {
            criteria: ActivityCriteria::default(),
            sort_key: SortKey::Timestamp,
            sort_order: SortOrder::Desc,
            page,
            per_page: 5,
        }
    }

    #[test]
    fn test_build_listing_pages() {
        // 12 assets, 6 in maintenance: 18 activities
        let listing = build_listing(&fleet(12), &request(2));
        assert_eq!(listing.page.total, 18);
        assert_eq!(listing.page.total_pages, 4);
        assert_eq!(listing.page.items.len(), 5);
        assert_eq!((listing.page.from, listing.page.to), (6, 10));
        assert_eq!(listing.buttons.len(), 4);
    }

    #[test]
    fn test_build_listing_clamps_page() {
        let listing = build_listing(&fleet(12), &request(99));
        assert_eq!(listing.page.page, 4);
        assert_eq!(listing.page.items.len(), 3);

        let listing = build_listing(&[], &request(3));
        assert_eq!(listing.page.page, 1);
        assert_eq!(listing.page.total_pages, 0);
        assert!(listing.page.items.is_empty());
        assert!(listing.buttons.is_empty());
    }

    #[test]
    fn test_build_listing_filters_before_paging() {
        let mut req = request(1);
        req.criteria.tab = Some(ActionType::Maintenance);
        let listing = build_listing(&fleet(12), &req);
        assert_eq!(listing.page.total, 6);
        assert!(listing
            .page
            .items
            .iter()
            .all(|a| a.action_type == ActionType::Maintenance));
        // newest first
        assert_eq!(listing.page.items[0].asset_name, "Laptop-10");
    }

    #[tokio::test]
    async fn test_recent_uses_default_limit() {
        let mut source = MockAssetSource::new();
        source.expect_list_assets().returning(|_| Ok(fleet(4)));
        let service = ActivitiesService::new(AssetCache::new(Arc::new(source)), 3);

        let recent = service.recent(&Credentials::default(), None).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].action_type, ActionType::Maintenance);

        let all = service.recent(&Credentials::default(), Some(50)).await.unwrap();
        assert_eq!(all.len(), 6);
    }
}
