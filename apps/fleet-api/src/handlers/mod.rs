//! Request handlers

pub mod vehicle;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fleetlink_domain::vehicle::ServiceError;
use tracing::warn;

use crate::dto::vehicle::ErrorResponse;

/// Transport status for each service error kind
pub(crate) fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation { .. } | ServiceError::InvalidArgument(_) => {
            StatusCode::BAD_REQUEST
        }
        ServiceError::DuplicateKey(_) => StatusCode::CONFLICT,
        ServiceError::NotFound | ServiceError::BrandNotFound(_) | ServiceError::NoMatch => {
            StatusCode::NOT_FOUND
        }
    }
}

/// Turn a service error into a JSON error response
pub(crate) fn error_response(err: ServiceError) -> Response {
    let status = status_for(&err);
    warn!(status = status.as_u16(), error = %err, "Request failed");
    (status, Json(ErrorResponse::new(err.to_string()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetlink_domain::VehicleId;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&ServiceError::validation(vec!["brand"])),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ServiceError::invalid_argument("speed")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ServiceError::DuplicateKey(VehicleId::new(1))),
            StatusCode::CONFLICT
        );
        assert_eq!(status_for(&ServiceError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&ServiceError::BrandNotFound("Tesla".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_for(&ServiceError::NoMatch), StatusCode::NOT_FOUND);
    }
}
