use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::ErrorResponse;
use crate::MembershipError;

/// converts `MembershipError` into appropriate HTTP responses
#[derive(Debug)]
pub struct ApiError(pub MembershipError);

impl From<MembershipError> for ApiError {
    fn from(err: MembershipError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_response = ErrorResponse::from(self.0.clone());
        let status = match &self.0 {
            MembershipError::Validation(_) => StatusCode::BAD_REQUEST,
            MembershipError::Unauthorized => StatusCode::UNAUTHORIZED,
            MembershipError::Forbidden => StatusCode::FORBIDDEN,
            MembershipError::NotFound => StatusCode::NOT_FOUND,
            MembershipError::Conflict
            | MembershipError::DatabaseError(_)
            | MembershipError::ConfigurationError(_)
            | MembershipError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(error_response)).into_response()
    }
}
