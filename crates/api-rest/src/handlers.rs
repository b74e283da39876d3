//! Route handlers.
//!
//! Each recipe handler extracts its inputs, makes one call on `RecipeService` and serializes
//! the result. Validation and store access live in `recipe-core`.

use crate::{error::ApiError, AppState};
use api_shared::{HealthRes, HealthService};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
};
use recipe_core::{DeleteOneAck, InsertOneAck, Recipe, RecipeError, RecipeId};
use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::IntoParams;

/// Query string accepted by `GET /recipes`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListRecipesQuery {
    /// Only return recipes whose `userEmail` matches exactly.
    pub email: Option<String>,
}

/// Reads a JSON request body.
///
/// A request sent without a JSON content type carries no body and reads as `{}`.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Value::Object(Map::new())),
        Err(rejection) => Err(RecipeError::InvalidRequest(rejection.body_text()).into()),
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Liveness message", body = String, content_type = "text/plain")
    )
)]
#[axum::debug_handler]
pub async fn liveness() -> &'static str {
    HealthService::liveness()
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
#[axum::debug_handler]
pub async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    params(ListRecipesQuery),
    responses(
        (status = 200, description = "Recipes, optionally filtered by owner", body = [api_shared::RecipeDoc]),
        (status = 400, description = "Malformed query string", body = api_shared::ErrorRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
/// List all recipes, or only those belonging to `email`.
///
/// Order is whatever the store returns; callers must not rely on it.
#[axum::debug_handler]
pub async fn list_recipes(
    State(state): State<AppState>,
    query: Result<Query<ListRecipesQuery>, QueryRejection>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let Query(query) = query.map_err(|e| RecipeError::InvalidRequest(e.body_text()))?;
    let recipes = state.recipe_service.list(query.email.as_deref()).await?;
    Ok(Json(recipes))
}

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "recipes",
    params(("id" = String, Path, description = "Recipe ID (24 hex characters)")),
    responses(
        (status = 200, description = "The recipe, or null if no recipe has this ID", body = api_shared::RecipeDoc),
        (status = 400, description = "Malformed ID", body = api_shared::ErrorRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
/// Fetch a single recipe.
///
/// A well-formed ID that matches nothing yields `200` with a `null` body rather than `404`.
#[axum::debug_handler]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Recipe>>, ApiError> {
    let recipe = state.recipe_service.get(&id).await?;
    Ok(Json(recipe))
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipes",
    request_body = api_shared::RecipeDoc,
    responses(
        (status = 200, description = "Recipe inserted", body = InsertOneAck),
        (status = 400, description = "userEmail missing or malformed body", body = api_shared::ErrorRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
/// Create a recipe. `likeCount` always starts at zero.
///
/// A body that is not a JSON object has no `userEmail` and is rejected as such.
#[axum::debug_handler]
pub async fn create_recipe(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<InsertOneAck>, ApiError> {
    let body = match json_body(body)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    let ack = state.recipe_service.create(body).await?;
    Ok(Json(ack))
}

#[utoipa::path(
    put,
    path = "/recipes/{id}",
    tag = "recipes",
    params(("id" = String, Path, description = "Recipe ID (24 hex characters)")),
    request_body = api_shared::RecipeDoc,
    responses(
        (status = 200, description = "Recipe after the update", body = api_shared::RecipeDoc),
        (status = 400, description = "Malformed ID, malformed body or invalid field value", body = api_shared::ErrorRes),
        (status = 404, description = "Recipe not found", body = api_shared::ErrorRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
/// Partially update a recipe. Fields missing from the body are left as they are.
#[axum::debug_handler]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
    // a malformed id is reported ahead of any body problem
    RecipeId::parse(&id)?;
    let patch = match json_body(body)? {
        Value::Object(map) => map,
        _ => {
            return Err(
                RecipeError::InvalidRequest("body must be a JSON object".into()).into(),
            )
        }
    };
    let recipe = state.recipe_service.update(&id, patch).await?;
    Ok(Json(recipe))
}

#[utoipa::path(
    put,
    path = "/recipes/{id}/like",
    tag = "recipes",
    params(("id" = String, Path, description = "Recipe ID (24 hex characters)")),
    responses(
        (status = 200, description = "Recipe after the like; likeCount is unchanged", body = api_shared::RecipeDoc),
        (status = 400, description = "Malformed ID", body = api_shared::ErrorRes),
        (status = 404, description = "Recipe not found", body = api_shared::ErrorRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn like_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = state.recipe_service.like(&id).await?;
    Ok(Json(recipe))
}

#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    tag = "recipes",
    params(("id" = String, Path, description = "Recipe ID (24 hex characters)")),
    responses(
        (status = 200, description = "Deletion acknowledgment; deletedCount is 0 when nothing matched", body = DeleteOneAck),
        (status = 400, description = "Malformed ID", body = api_shared::ErrorRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOneAck>, ApiError> {
    let ack = state.recipe_service.delete(&id).await?;
    Ok(Json(ack))
}
