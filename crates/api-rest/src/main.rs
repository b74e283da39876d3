//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API over an in-memory recipe store.
//!
//! ## Intended use
//! Useful for frontend development and debugging without MongoDB credentials. Recipes live
//! only as long as the process. The workspace's main `recipe-book-run` binary serves the same
//! router backed by MongoDB.

use api_rest::{router, shutdown_signal};
use recipe_core::{store::InMemoryRecipeStore, RecipeService};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the standalone REST API server
///
/// # Environment Variables
/// - `RECIPE_REST_ADDR`: Server address (default: "0.0.0.0:5000")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("RECIPE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".into());

    tracing::info!("-- Starting recipe REST API (in-memory store) on {}", addr);

    let recipe_service = RecipeService::new(Arc::new(InMemoryRecipeStore::new()));
    let app = router(recipe_service);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
