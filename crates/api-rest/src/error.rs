use api_shared::ErrorRes;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use recipe_core::RecipeError;

/// Handler error: a core error rendered as a status code and an `{"error": ...}` body.
///
/// Store and configuration faults are logged and answered with a generic message so driver
/// details never reach the client.
#[derive(Debug)]
pub struct ApiError(RecipeError);

impl From<RecipeError> for ApiError {
    fn from(err: RecipeError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            RecipeError::InvalidIdentifier(_)
            | RecipeError::MissingRequiredField(_)
            | RecipeError::InvalidFieldValue { .. }
            | RecipeError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RecipeError::NotFound => StatusCode::NOT_FOUND,
            RecipeError::Store(_) | RecipeError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!("Recipe request failed: {:?}", self.0);
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(ErrorRes::new(message))).into_response()
    }
}
