use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_list::errors::ShoppingListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let (status, name) = match &self {
            ShoppingListError::NameEmpty | ShoppingListError::InvalidPrice(_) => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
        };

        (status, ErrorResponse::json(name, message))
    }
}

pub fn not_found(message: &str) -> Json<ErrorResponse> {
    ErrorResponse::json("NotFound", message)
}
