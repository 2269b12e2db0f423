//! API handlers for the dashboard REST endpoints

pub mod activities;
pub mod assets;
pub mod directory;
pub mod health;
pub mod openapi;
pub mod reports;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{get, post, put},
    Router,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use std::str::FromStr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    pipeline::{parse_range_bound, DateRange},
    repository::Credentials,
    AppState,
};

/// Credentials of the caller, forwarded to the asset API.
///
/// Authentication itself belongs to the asset API: the token is not
/// inspected here. Requests without a token are only accepted when a
/// service token is configured.
pub struct Caller(pub Credentials);

#[async_trait]
impl FromRequestParts<AppState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(bearer))) => Ok(Caller(Credentials::bearer(bearer.token()))),
            Err(_) if state.config.upstream.api_token.is_some() => Ok(Caller(Credentials::default())),
            Err(rejection) => Err(AppError::Authentication(rejection.to_string())),
        }
    }
}

/// Normalize a dropdown value: blank and "all" mean no filter
pub(crate) fn selection(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
        .map(str::to_string)
}

/// Normalize then parse a dropdown value
pub(crate) fn parse_selection<T>(value: Option<&str>, field: &str) -> AppResult<Option<T>>
where
    T: FromStr<Err = String>,
{
    selection(value)
        .map(|v| v.parse::<T>())
        .transpose()
        .map_err(|e| AppError::BadRequest(format!("Invalid {}: {}", field, e)))
}

/// Build an inclusive date range from optional query bounds
pub(crate) fn date_range(from: Option<&str>, to: Option<&str>) -> AppResult<DateRange> {
    let bound = |value: Option<&str>, upper: bool, field: &str| -> AppResult<_> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => Ok(None),
            Some(raw) => parse_range_bound(raw, upper)
                .map(Some)
                .ok_or_else(|| AppError::BadRequest(format!("Invalid date for '{}': {}", field, raw))),
        }
    };

    let range = DateRange {
        from: bound(from, false, "from")?,
        to: bound(to, true, "to")?,
    };
    if let (Some(from), Some(to)) = (range.from, range.to) {
        if from > to {
            return Err(AppError::BadRequest("Date range starts after it ends".to_string()));
        }
    }
    Ok(range)
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Activity log
        .route("/activities", get(activities::list_activities))
        .route("/activities/recent", get(activities::recent_activities))
        .route("/activities/options", get(activities::filter_options))
        // Inventory
        .route("/assets", get(assets::list_assets).post(assets::create_asset))
        .route("/assets/maintenance", get(assets::list_maintenance))
        .route("/assets/overview", get(assets::inventory_overview))
        .route("/assets/refresh", post(assets::refresh_assets))
        .route("/assets/:id", put(assets::update_asset))
        // Reports
        .route("/reports/summary", get(reports::report_summary))
        .route("/reports/assets", get(reports::report_assets))
        // Users
        .route("/users", get(directory::list_users).post(directory::add_user))
        .route("/users/me", get(directory::me))
        .route("/users/me/password", post(directory::change_password))
        .route("/users/:id", put(directory::update_user))
        // Reference lists
        .route(
            "/references/:kind",
            get(directory::list_references).post(directory::create_reference),
        )
        .route("/dashboard/categories", get(directory::asset_categories))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
