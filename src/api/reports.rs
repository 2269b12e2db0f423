//! Report endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_with::{serde_as, NoneAsEmptyString};
use utoipa::IntoParams;

use crate::{
    error::{AppError, AppResult},
    models::{Asset, AssetCondition, AssetStatus, ReportSummary},
    pipeline::ReportCriteria,
    AppState,
};

use super::{date_range, parse_selection, selection, Caller};

/// Report filters
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// Purchase date lower bound
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub date_from: Option<String>,
    /// Purchase date upper bound (inclusive)
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub date_to: Option<String>,
    pub asset_type: Option<String>,
    pub status: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    /// Comma-separated conditions, e.g. `new,good`; blank items are ignored
    pub conditions: Option<String>,
}

/// Parse a comma-separated condition list
fn parse_conditions(raw: Option<&str>) -> AppResult<Vec<AssetCondition>> {
    let mut conditions = Vec::new();
    for item in raw.unwrap_or_default().split(',').map(str::trim) {
        if item.is_empty() {
            continue;
        }
        let condition = item
            .parse::<AssetCondition>()
            .map_err(|e| AppError::BadRequest(format!("Invalid conditions: {}", e)))?;
        if !conditions.contains(&condition) {
            conditions.push(condition);
        }
    }
    Ok(conditions)
}

impl ReportQuery {
    pub fn criteria(self) -> AppResult<ReportCriteria> {
        Ok(ReportCriteria {
            purchase_range: date_range(self.date_from.as_deref(), self.date_to.as_deref())?,
            asset_type: selection(self.asset_type.as_deref()),
            status: parse_selection::<AssetStatus>(self.status.as_deref(), "status")?,
            department: selection(self.department.as_deref()),
            location: selection(self.location.as_deref()),
            conditions: parse_conditions(self.conditions.as_deref())?,
        })
    }
}

/// Chart series for the filtered assets
#[utoipa::path(
    get,
    path = "/reports/summary",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Report summary", body = ReportSummary),
        (status = 400, description = "Invalid filter", body = crate::error::ErrorResponse)
    )
)]
pub async fn report_summary(
    State(state): State<AppState>,
    Caller(credentials): Caller,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<ReportSummary>> {
    let criteria = query.criteria()?;
    let summary = state.services.reports.summary(&credentials, &criteria).await?;
    Ok(Json(summary))
}

/// Assets matching the report filters
#[utoipa::path(
    get,
    path = "/reports/assets",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Filtered assets", body = Vec<Asset>)
    )
)]
pub async fn report_assets(
    State(state): State<AppState>,
    Caller(credentials): Caller,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Vec<Asset>>> {
    let criteria = query.criteria()?;
    let assets = state.services.reports.assets(&credentials, &criteria).await?;
    Ok(Json(assets))
}
