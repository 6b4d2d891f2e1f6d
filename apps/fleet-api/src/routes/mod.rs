//! API routes

pub mod vehicle;

use axum::Router;
use fleetlink_domain::VehicleDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::vehicle::{
        AverageSpeedResponse, BatchCreatedResponse, CreatedResponse, ErrorResponse,
        UpdateSpeedRequest, UpdatedResponse, VehiclesResponse,
    },
    handlers, AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::vehicle::list_vehicles_handler,
        handlers::vehicle::create_vehicle_handler,
        handlers::vehicle::bulk_create_handler,
        handlers::vehicle::find_by_color_and_year_handler,
        handlers::vehicle::find_by_brand_and_years_handler,
        handlers::vehicle::average_speed_by_brand_handler,
        handlers::vehicle::update_speed_handler,
        handlers::vehicle::delete_vehicle_handler,
        handlers::vehicle::find_by_dimensions_handler,
        health_handler
    ),
    components(
        schemas(
            VehicleDoc,
            VehiclesResponse,
            CreatedResponse,
            BatchCreatedResponse,
            AverageSpeedResponse,
            UpdateSpeedRequest,
            UpdatedResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "vehicles", description = "Vehicle registry endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "FleetLink API",
        version = "0.1.0",
        description = "CRUD and search service for the FleetLink vehicle registry",
        contact(
            name = "FleetLink Team"
        )
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(vehicle::routes())
        .route("/health", axum::routing::get(health_handler))
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_vehicle_paths() {
        let doc = ApiDoc::openapi();

        for path in [
            "/vehicles",
            "/vehicles/batch",
            "/vehicles/dimensions",
            "/vehicles/{id}",
            "/vehicles/{id}/update_speed",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
