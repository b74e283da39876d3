use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, shutdown_signal};
use recipe_core::{port_from_env_value, store::MongoRecipeStore, RecipeService, StoreConfig};

/// Main entry point for the recipe book API
///
/// Resolves configuration, connects to MongoDB once, and serves the REST API until Ctrl+C or
/// SIGTERM.
///
/// # Environment Variables
/// - `PORT`: listen port (default: 5000)
/// - `DB_USER`, `DB_PASS`: MongoDB credentials (required)
/// - `DB_HOST`: MongoDB SRV host (default: "cluster0.8holrnh.mongodb.net")
/// - `DB_NAME`: database name (default: "recipeDB")
///
/// A `.env` file in the working directory is loaded first if present.
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration is missing, or startup or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("recipe_book_run=info".parse()?)
                .add_directive("recipe_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = port_from_env_value(std::env::var("PORT").ok())?;
    let store_cfg = StoreConfig::from_env_values(
        std::env::var("DB_USER").ok(),
        std::env::var("DB_PASS").ok(),
        std::env::var("DB_HOST").ok(),
        std::env::var("DB_NAME").ok(),
    )?;

    tracing::info!(
        "++ Using MongoDB database {} on {}",
        store_cfg.database(),
        store_cfg.host()
    );
    let store = MongoRecipeStore::connect(&store_cfg).await?;
    let app = router(RecipeService::new(Arc::new(store)));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("++ Recipe Book API running on port {}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
