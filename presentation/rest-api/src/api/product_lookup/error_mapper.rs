use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product_lookup::errors::LookupError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for LookupError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            LookupError::QueryEmpty => (StatusCode::BAD_REQUEST, "ValidationError"),
            LookupError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            LookupError::Unavailable => (StatusCode::BAD_GATEWAY, "LookupUnavailable"),
        };

        (status, ErrorResponse::json(name, self.to_string()))
    }
}
