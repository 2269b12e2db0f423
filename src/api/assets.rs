//! Inventory endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{Asset, AssetStatus, InventoryOverview},
    pipeline::{page_buttons, AssetCriteria, Page, PageButton},
    AppState,
};

use super::{parse_selection, selection, Caller};

/// Inventory list query. Filters are exact matches; "all" disables one.
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AssetQuery {
    /// Search over name, serial number, manufacturer, model and assigned user
    #[validate(length(max = 200))]
    pub search: Option<String>,
    pub status: Option<String>,
    pub asset_type: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<usize>,
}

impl AssetQuery {
    fn criteria(&self) -> AppResult<AssetCriteria> {
        Ok(AssetCriteria {
            search: self.search.clone(),
            status: parse_selection::<AssetStatus>(self.status.as_deref(), "status")?,
            asset_type: selection(self.asset_type.as_deref()),
            department: selection(self.department.as_deref()),
            location: selection(self.location.as_deref()),
        })
    }
}

/// One page of the inventory
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetPageResponse {
    pub items: Vec<Asset>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub from: usize,
    pub to: usize,
    pub buttons: Vec<PageButton>,
}

impl From<Page<Asset>> for AssetPageResponse {
    fn from(page: Page<Asset>) -> Self {
        Self {
            buttons: page_buttons(page.page, page.total_pages),
            items: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
            from: page.from,
            to: page.to,
        }
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    #[validate(length(max = 200))]
    pub search: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RefreshResponse {
    /// Number of assets in the refreshed snapshot
    pub count: usize,
}

/// List inventory assets
#[utoipa::path(
    get,
    path = "/assets",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(AssetQuery),
    responses(
        (status = 200, description = "Asset page", body = AssetPageResponse),
        (status = 400, description = "Invalid filter", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_assets(
    State(state): State<AppState>,
    Caller(credentials): Caller,
    Query(query): Query<AssetQuery>,
) -> AppResult<Json<AssetPageResponse>> {
    query.validate()?;
    let criteria = query.criteria()?;
    let page = state
        .services
        .assets
        .list(
            &credentials,
            &criteria,
            query.page.unwrap_or(1),
            query
                .per_page
                .unwrap_or(state.config.pagination.default_per_page),
        )
        .await?;
    Ok(Json(page.into()))
}

/// Assets currently under maintenance
#[utoipa::path(
    get,
    path = "/assets/maintenance",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(SearchQuery),
    responses(
        (status = 200, description = "Assets in maintenance", body = Vec<Asset>)
    )
)]
pub async fn list_maintenance(
    State(state): State<AppState>,
    Caller(credentials): Caller,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Asset>>> {
    query.validate()?;
    let assets = state
        .services
        .assets
        .maintenance(&credentials, query.search.as_deref())
        .await?;
    Ok(Json(assets))
}

/// Inventory overview aggregated by the asset API
#[utoipa::path(
    get,
    path = "/assets/overview",
    tag = "assets",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Inventory overview", body = InventoryOverview),
        (status = 502, description = "Asset API failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn inventory_overview(
    State(state): State<AppState>,
    Caller(credentials): Caller,
) -> AppResult<Json<InventoryOverview>> {
    let overview = state.services.assets.overview(&credentials).await?;
    Ok(Json(overview))
}

/// Create an asset
#[utoipa::path(
    post,
    path = "/assets",
    tag = "assets",
    security(("bearer_auth" = [])),
    request_body = Asset,
    responses(
        (status = 201, description = "Asset created", body = Asset),
        (status = 400, description = "Invalid asset", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_asset(
    State(state): State<AppState>,
    Caller(credentials): Caller,
    Json(asset): Json<Asset>,
) -> AppResult<(StatusCode, Json<Asset>)> {
    let created = state.services.assets.create(&credentials, &asset).await?;
    Ok((StatusCode::CREATED, Json(created.unwrap_or(asset))))
}

/// Update an asset
#[utoipa::path(
    put,
    path = "/assets/{id}",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Asset ID")),
    request_body = Asset,
    responses(
        (status = 200, description = "Asset updated", body = Asset),
        (status = 404, description = "Asset not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_asset(
    State(state): State<AppState>,
    Caller(credentials): Caller,
    Path(id): Path<String>,
    Json(asset): Json<Asset>,
) -> AppResult<Json<Asset>> {
    let updated = state
        .services
        .assets
        .update(&credentials, &id, &asset)
        .await?;
    Ok(Json(updated.unwrap_or(asset)))
}

/// Drop the cached snapshot and fetch it again
#[utoipa::path(
    post,
    path = "/assets/refresh",
    tag = "assets",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Snapshot refreshed", body = RefreshResponse)
    )
)]
pub async fn refresh_assets(
    State(state): State<AppState>,
    Caller(credentials): Caller,
) -> AppResult<Json<RefreshResponse>> {
    let count = state.services.assets.refresh(&credentials).await?;
    Ok(Json(RefreshResponse { count }))
}
