use canteen_storefront::cart::AppState;
use canteen_storefront::config::Config;
use canteen_storefront::router::create_app_router;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "canteen_storefront=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // Initialize application state
    let state = Arc::new(AppState::from_config(&config)?);

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address
    let addr = config.addr()?;
    tracing::info!("Storefront running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
