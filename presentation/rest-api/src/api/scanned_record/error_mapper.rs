use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::scanned_record::errors::ScanError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ScanError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ScanError::EmptyPayload => (
                StatusCode::BAD_REQUEST,
                "ScanDecodeError",
                self.to_string(),
            ),
            ScanError::DecodeFailed(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ScanDecodeError",
                self.to_string(),
            ),
            ScanError::Repository(RepositoryError::Deserialization) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DeserializationError",
                RepositoryError::Deserialization.to_string(),
            ),
            ScanError::Repository(err) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "StorageError",
                err.to_string(),
            ),
        };

        (status, ErrorResponse::json(name, message))
    }
}
