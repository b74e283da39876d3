//! Response and documentation types shared across API surfaces.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Body of every error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    #[schema(example = "Recipe not found")]
    pub error: String,
}

impl ErrorRes {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// OpenAPI description of a recipe document.
///
/// Only the server-managed fields are listed. Recipes accept and return any additional
/// fields (title, ingredients, servings, ...) unchanged, except that a textual
/// `preparationTime` is stored as an integer on update.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDoc {
    #[serde(rename = "_id")]
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    #[schema(example = "cook@example.com")]
    pub user_email: String,
    #[schema(example = 0)]
    pub like_count: i64,
    #[schema(example = "Tomato soup")]
    pub title: Option<String>,
    #[schema(example = 30)]
    pub preparation_time: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_res_serializes_error_field() {
        let json = serde_json::to_value(ErrorRes::new("Invalid ID")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Invalid ID" }));
    }
}
