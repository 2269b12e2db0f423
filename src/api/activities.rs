//! Activity log endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{ActionType, Activity},
    pipeline::{ActivityCriteria, FilterOptions, PageButton, SortKey, SortOrder},
    services::activities::{ActivityListRequest, ActivityListing},
    AppState,
};

use super::{date_range, parse_selection, selection, Caller};

/// Activity page query. "all" or an empty value disables a filter.
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActivityQuery {
    /// Selected tab (action type)
    pub tab: Option<String>,
    /// Free-text search over serial number, asset name, user, department and notes
    #[validate(length(max = 200))]
    pub search: Option<String>,
    pub asset_type: Option<String>,
    pub action_type: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    /// Inclusive lower bound (RFC 3339 or YYYY-MM-DD)
    pub from: Option<String>,
    /// Inclusive upper bound; a bare date covers the whole day
    pub to: Option<String>,
    #[param(inline)]
    pub sort_by: Option<SortKey>,
    #[param(inline)]
    pub sort_order: Option<SortOrder>,
    /// Page number (default: 1)
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    /// Items per page (default from configuration)
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<usize>,
}

impl ActivityQuery {
    /// Turn the raw query into a typed request
    pub fn into_request(self, default_per_page: usize) -> AppResult<ActivityListRequest> {
        let criteria = ActivityCriteria {
            tab: parse_selection::<ActionType>(self.tab.as_deref(), "tab")?,
            action_type: parse_selection::<ActionType>(self.action_type.as_deref(), "action type")?,
            search: self.search,
            asset_type: selection(self.asset_type.as_deref()),
            department: selection(self.department.as_deref()),
            location: selection(self.location.as_deref()),
            date_range: date_range(self.from.as_deref(), self.to.as_deref())?,
        };

        Ok(ActivityListRequest {
            criteria,
            sort_key: self.sort_by.unwrap_or_default(),
            sort_order: self.sort_order.unwrap_or_default(),
            page: self.page.unwrap_or(1),
            per_page: self.per_page.unwrap_or(default_per_page),
        })
    }
}

/// One page of the activity log
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPageResponse {
    pub items: Vec<Activity>,
    /// Number of activities matching the filters
    pub total: usize,
    /// Page actually returned (after clamping)
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    /// 1-indexed position of the first entry shown
    pub from: usize,
    /// 1-indexed position of the last entry shown
    pub to: usize,
    /// Pagination bar layout
    pub buttons: Vec<PageButton>,
    /// Number of active dropdown/date filters
    pub active_filters: usize,
}

impl From<ActivityListing> for ActivityPageResponse {
    fn from(listing: ActivityListing) -> Self {
        let page = listing.page;
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
            from: page.from,
            to: page.to,
            buttons: listing.buttons,
            active_filters: listing.active_filters,
        }
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentQuery {
    /// Number of entries (default from configuration)
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
}

/// List activities with filters, sorting and pagination
#[utoipa::path(
    get,
    path = "/activities",
    tag = "activities",
    security(("bearer_auth" = [])),
    params(ActivityQuery),
    responses(
        (status = 200, description = "Activity page", body = ActivityPageResponse),
        (status = 400, description = "Invalid filter", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_activities(
    State(state): State<AppState>,
    Caller(credentials): Caller,
    Query(query): Query<ActivityQuery>,
) -> AppResult<Json<ActivityPageResponse>> {
    query.validate()?;
    let request = query.into_request(state.config.pagination.default_per_page)?;
    let listing = state.services.activities.list(&credentials, &request).await?;
    Ok(Json(listing.into()))
}

/// Most recent activities (dashboard card)
#[utoipa::path(
    get,
    path = "/activities/recent",
    tag = "activities",
    security(("bearer_auth" = [])),
    params(RecentQuery),
    responses(
        (status = 200, description = "Most recent activities", body = Vec<Activity>)
    )
)]
pub async fn recent_activities(
    State(state): State<AppState>,
    Caller(credentials): Caller,
    Query(query): Query<RecentQuery>,
) -> AppResult<Json<Vec<Activity>>> {
    query.validate()?;
    let activities = state.services.activities.recent(&credentials, query.limit).await?;
    Ok(Json(activities))
}

/// Values available in the activity filter dropdowns
#[utoipa::path(
    get,
    path = "/activities/options",
    tag = "activities",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Filter options", body = FilterOptions)
    )
)]
pub async fn filter_options(
    State(state): State<AppState>,
    Caller(credentials): Caller,
) -> AppResult<Json<FilterOptions>> {
    let options = state.services.activities.options(&credentials).await?;
    Ok(Json(options))
}
