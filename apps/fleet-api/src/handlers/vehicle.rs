//! Vehicle handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fleetlink_domain::vehicle::{VehicleDoc, VehicleId, VehicleServicePort};
use tracing::info;

use super::error_response;
use crate::{
    dto::vehicle::{
        AverageSpeedResponse, BatchCreatedResponse, CreatedResponse, DimensionsQuery,
        ErrorResponse, UpdateSpeedRequest, UpdatedResponse, VehiclesResponse,
    },
    AppState,
};

/// List every vehicle
#[utoipa::path(
    get,
    path = "/vehicles",
    responses(
        (status = 200, description = "All stored vehicles", body = VehiclesResponse)
    ),
    tag = "vehicles"
)]
pub async fn list_vehicles_handler(State(state): State<AppState>) -> Response {
    let vehicles = state.vehicle_service.find_all().await;
    info!(count = vehicles.len(), "Listed vehicles");
    (StatusCode::OK, Json(VehiclesResponse::success(vehicles))).into_response()
}

/// Create a single vehicle
#[utoipa::path(
    post,
    path = "/vehicles",
    request_body = VehicleDoc,
    responses(
        (status = 201, description = "Vehicle created", body = CreatedResponse),
        (status = 400, description = "Bad request - invalid fields", body = ErrorResponse),
        (status = 409, description = "Conflict - vehicle id already exists", body = ErrorResponse)
    ),
    tag = "vehicles"
)]
pub async fn create_vehicle_handler(
    State(state): State<AppState>,
    Json(payload): Json<VehicleDoc>,
) -> Response {
    info!(id = payload.id, "Received create request");

    match state.vehicle_service.create(payload).await {
        Ok(saved) => (
            StatusCode::CREATED,
            Json(CreatedResponse {
                success: format!("Vehicle with ID {} was created successfully", saved.id),
            }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// Create a batch of vehicles, all or nothing
#[utoipa::path(
    post,
    path = "/vehicles/batch",
    request_body = Vec<VehicleDoc>,
    responses(
        (status = 201, description = "Every vehicle created", body = BatchCreatedResponse),
        (status = 400, description = "Bad request - a document has invalid fields", body = ErrorResponse),
        (status = 409, description = "Conflict - a vehicle id already exists", body = ErrorResponse)
    ),
    tag = "vehicles"
)]
pub async fn bulk_create_handler(
    State(state): State<AppState>,
    Json(payload): Json<Vec<VehicleDoc>>,
) -> Response {
    info!(size = payload.len(), "Received batch create request");

    match state.vehicle_service.bulk_create(payload).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(BatchCreatedResponse {
                status: "created".to_string(),
                message: "Successfully created vehicles".to_string(),
            }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// Find vehicles by color and fabrication year
#[utoipa::path(
    get,
    path = "/vehicles/color/{color}/year/{year}",
    params(
        ("color" = String, Path, description = "Color, case-insensitive"),
        ("year" = i32, Path, description = "Fabrication year")
    ),
    responses(
        (status = 200, description = "Matching vehicles", body = VehiclesResponse),
        (status = 404, description = "No vehicle matches", body = ErrorResponse)
    ),
    tag = "vehicles"
)]
pub async fn find_by_color_and_year_handler(
    State(state): State<AppState>,
    Path((color, year)): Path<(String, i32)>,
) -> Response {
    info!(color = %color, year, "Received color and year search");

    match state
        .vehicle_service
        .find_by_color_and_year(&color, year)
        .await
    {
        Ok(vehicles) => (StatusCode::OK, Json(VehiclesResponse::success(vehicles))).into_response(),
        Err(err) => error_response(err),
    }
}

/// Find vehicles of a brand built within a year range
#[utoipa::path(
    get,
    path = "/vehicles/brand/{brand}/between/{start_year}/{end_year}",
    params(
        ("brand" = String, Path, description = "Brand, case-insensitive"),
        ("start_year" = i32, Path, description = "First year, inclusive"),
        ("end_year" = i32, Path, description = "Last year, inclusive")
    ),
    responses(
        (status = 200, description = "Matching vehicles", body = VehiclesResponse),
        (status = 400, description = "Bad request - empty brand or zero year", body = ErrorResponse),
        (status = 404, description = "No vehicle matches", body = ErrorResponse)
    ),
    tag = "vehicles"
)]
pub async fn find_by_brand_and_years_handler(
    State(state): State<AppState>,
    Path((brand, start_year, end_year)): Path<(String, i32, i32)>,
) -> Response {
    info!(brand = %brand, start_year, end_year, "Received brand and years search");

    match state
        .vehicle_service
        .find_by_brand_and_years(&brand, start_year, end_year)
        .await
    {
        Ok(vehicles) => (StatusCode::OK, Json(VehiclesResponse::success(vehicles))).into_response(),
        Err(err) => error_response(err),
    }
}

/// Average maximum speed of a brand
#[utoipa::path(
    get,
    path = "/vehicles/average_speed/brand/{brand}",
    params(
        ("brand" = String, Path, description = "Brand, case-insensitive")
    ),
    responses(
        (status = 200, description = "Average maximum speed", body = AverageSpeedResponse),
        (status = 404, description = "Brand has no vehicles", body = ErrorResponse)
    ),
    tag = "vehicles"
)]
pub async fn average_speed_by_brand_handler(
    State(state): State<AppState>,
    Path(brand): Path<String>,
) -> Response {
    info!(brand = %brand, "Received average speed request");

    match state.vehicle_service.average_speed_by_brand(&brand).await {
        Ok(average) => (
            StatusCode::OK,
            Json(AverageSpeedResponse {
                status: "success".to_string(),
                message: format!("average speed is {:.6}", average),
                average_speed: average,
            }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// Update the maximum speed of a vehicle
#[utoipa::path(
    put,
    path = "/vehicles/{id}/update_speed",
    params(
        ("id" = i64, Path, description = "Vehicle identifier")
    ),
    request_body = UpdateSpeedRequest,
    responses(
        (status = 200, description = "Speed updated", body = UpdatedResponse),
        (status = 400, description = "Bad request - id or speed out of bounds", body = ErrorResponse),
        (status = 404, description = "Vehicle not found", body = ErrorResponse)
    ),
    tag = "vehicles"
)]
pub async fn update_speed_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateSpeedRequest>,
) -> Response {
    info!(id, new_speed = payload.new_speed, "Received speed update");

    match state
        .vehicle_service
        .update_speed(VehicleId::new(id), payload.new_speed)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(UpdatedResponse {
                success: format!("successfully updated vehicle with id {}", id),
            }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// Delete a vehicle
#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    params(
        ("id" = i64, Path, description = "Vehicle identifier")
    ),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 404, description = "Vehicle not found", body = ErrorResponse)
    ),
    tag = "vehicles"
)]
pub async fn delete_vehicle_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    info!(id, "Received delete request");

    match state.vehicle_service.delete(VehicleId::new(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

/// Find vehicles within length and width ranges
#[utoipa::path(
    get,
    path = "/vehicles/dimensions",
    params(DimensionsQuery),
    responses(
        (status = 200, description = "Matching vehicles", body = VehiclesResponse),
        (status = 400, description = "Bad request - malformed ranges", body = ErrorResponse),
        (status = 404, description = "No vehicle fits both ranges", body = ErrorResponse)
    ),
    tag = "vehicles"
)]
pub async fn find_by_dimensions_handler(
    State(state): State<AppState>,
    Query(query): Query<DimensionsQuery>,
) -> Response {
    info!(length = ?query.length, width = ?query.width, "Received dimensions search");

    let Some(((min_length, max_length), (min_width, max_width))) = query.ranges() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Incorrect query structure")),
        )
            .into_response();
    };

    match state
        .vehicle_service
        .find_by_dimensions(min_length, max_length, min_width, max_width)
        .await
    {
        Ok(vehicles) => (StatusCode::OK, Json(VehiclesResponse::success(vehicles))).into_response(),
        Err(err) => error_response(err),
    }
}
