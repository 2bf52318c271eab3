use std::sync::Arc;

use recipes::config::Config;
use recipes::models::AppState;
use recipes::server::{Server, ServerError, shutdown_signal};
use recipes::services::store::RecipeStore;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipes=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let store = if config.seed_recipes {
        RecipeStore::with_seed()
    } else {
        RecipeStore::new()
    };
    let state = Arc::new(AppState::new(store));

    let server = Server::start(config.addr(), state).await?;
    info!("Server starting at {}", server.url());

    shutdown_signal().await;
    server.stop().await
}
