//! # API REST
//!
//! REST API implementation for the recipe book.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, request tracing)
//!
//! Recipe semantics live in `recipe-core`; this crate only maps requests onto
//! [`RecipeService`] calls and results onto responses.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod handlers;

use api_shared::{ErrorRes, HealthRes, RecipeDoc};
use axum::{
    routing::{get, put},
    Router,
};
use recipe_core::{DeleteOneAck, InsertOneAck, RecipeService};
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// Application state shared across REST API handlers.
///
/// Holds the single long-lived [`RecipeService`]; the store handle inside it is created once
/// at startup.
#[derive(Clone)]
pub struct AppState {
    pub recipe_service: RecipeService,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::liveness,
        handlers::health,
        handlers::list_recipes,
        handlers::get_recipe,
        handlers::create_recipe,
        handlers::update_recipe,
        handlers::like_recipe,
        handlers::delete_recipe,
    ),
    components(schemas(RecipeDoc, InsertOneAck, DeleteOneAck, ErrorRes, HealthRes)),
    tags((name = "recipes", description = "Recipe create/read/update/delete"))
)]
pub struct ApiDoc;

/// Builds the REST router over `recipe_service`.
///
/// All origins are allowed, and every request is traced.
pub fn router(recipe_service: RecipeService) -> Router {
    Router::new()
        .route("/", get(handlers::liveness))
        .route("/health", get(handlers::health))
        .route(
            "/recipes",
            get(handlers::list_recipes).post(handlers::create_recipe),
        )
        .route(
            "/recipes/:id",
            get(handlers::get_recipe)
                .put(handlers::update_recipe)
                .delete(handlers::delete_recipe),
        )
        .route("/recipes/:id/like", put(handlers::like_recipe))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { recipe_service })
}

/// Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.
///
/// Pass to `axum::serve(..).with_graceful_shutdown(..)` so in-flight requests finish.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
