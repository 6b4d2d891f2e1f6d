//! Vehicle routes

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    handlers::vehicle::{
        average_speed_by_brand_handler, bulk_create_handler, create_vehicle_handler,
        delete_vehicle_handler, find_by_brand_and_years_handler, find_by_color_and_year_handler,
        find_by_dimensions_handler, list_vehicles_handler, update_speed_handler,
    },
    AppState,
};

/// Create vehicle routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/vehicles",
            get(list_vehicles_handler).post(create_vehicle_handler),
        )
        .route("/vehicles/batch", post(bulk_create_handler))
        .route("/vehicles/dimensions", get(find_by_dimensions_handler))
        .route(
            "/vehicles/color/:color/year/:year",
            get(find_by_color_and_year_handler),
        )
        .route(
            "/vehicles/brand/:brand/between/:start_year/:end_year",
            get(find_by_brand_and_years_handler),
        )
        .route(
            "/vehicles/average_speed/brand/:brand",
            get(average_speed_by_brand_handler),
        )
        .route("/vehicles/:id/update_speed", put(update_speed_handler))
        .route("/vehicles/:id", delete(delete_vehicle_handler))
}
