//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{activities, assets, directory, health, reports};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "IT Asset Dashboard API",
        version = "1.0.0",
        description = "Activity log, inventory and reports over an external asset API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    modifiers(&SecurityAddon),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Activities
        activities::list_activities,
        activities::recent_activities,
        activities::filter_options,
        // Assets
        assets::list_assets,
        assets::list_maintenance,
        assets::inventory_overview,
        assets::create_asset,
        assets::update_asset,
        assets::refresh_assets,
        // Reports
        reports::report_summary,
        reports::report_assets,
        // Users
        directory::me,
        directory::list_users,
        directory::add_user,
        directory::update_user,
        directory::change_password,
        // Reference lists
        directory::list_references,
        directory::create_reference,
        directory::asset_categories,
    ),
    components(
        schemas(
            // Activities
            crate::models::Activity,
            crate::models::ActionType,
            crate::pipeline::PageButton,
            crate::pipeline::FilterOptions,
            crate::pipeline::SortKey,
            crate::pipeline::SortOrder,
            activities::ActivityPageResponse,
            // Assets
            crate::models::Asset,
            crate::models::Assignment,
            crate::models::AssetStatus,
            crate::models::AssetCondition,
            crate::models::CountBucket,
            crate::models::InventoryOverview,
            assets::AssetPageResponse,
            assets::RefreshResponse,
            // Reports
            crate::models::ReportSummary,
            crate::models::DistributionEntry,
            crate::models::ValueEntry,
            // Users
            crate::models::User,
            crate::models::AddedBy,
            crate::models::NewUser,
            crate::models::UpdateUser,
            crate::models::ChangePassword,
            directory::UserListResponse,
            // Reference lists
            crate::models::ReferenceEntry,
            crate::models::ReferenceKind,
            crate::models::NewReference,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "activities", description = "Activity log derived from asset state"),
        (name = "assets", description = "Inventory management"),
        (name = "reports", description = "Asset reports"),
        (name = "users", description = "User management"),
        (name = "references", description = "Categories, departments and locations")
    )
)]
pub struct ApiDoc;

/// Declares the bearer scheme forwarded to the asset API
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/activities"));
        assert!(doc.paths.paths.contains_key("/assets/{id}"));
        assert!(doc.paths.paths.contains_key("/reports/summary"));
        assert!(doc.paths.paths.contains_key("/references/{kind}"));
        assert!(doc.paths.paths.contains_key("/users/me/password"));
    }
}
