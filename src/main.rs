//! Articles API
//!
//! A read-only REST API over the article collections of each publication's MongoDB cluster.

mod api;
mod config;
mod db;
mod errors;
mod models;
mod query;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use config::Config;
use db::{ArticleRepository, TenantRegistry};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<TenantRegistry>,
    pub articles: Arc<ArticleRepository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let fmt_layer = if config.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Starting articles API");
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Query timeout: {:?}", config.query_timeout);

    // Connect every tenant; failure aborts startup
    let registry = match TenantRegistry::initialize(
        &config.credentials,
        &config.tenants,
        config.query_timeout,
    )
    .await
    {
        Ok(registry) => Arc::new(registry),
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            return Err(e.into());
        }
    };
    tracing::info!("Connected to {} tenants", registry.tenants().len());

    let articles = Arc::new(ArticleRepository::new(
        registry.clone(),
        config.query_timeout,
    ));

    // Create application state
    let state = AppState {
        registry: registry.clone(),
        articles,
    };

    // Build router
    let app = create_router(state);
    tracing::info!("Routes initialized");

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    registry.shutdown().await;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(api::health_check))
        .route("/{tenant}/articles", get(api::list_articles))
        .route(
            "/{tenant}/articles/recent/{count}",
            get(api::recent_articles),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
