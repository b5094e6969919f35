//! # laboratorial-server
//!
//! REST API serving labor-market indicator forecasts and text sentiment.
//! Every request carries its session in the `x-session-id` header; one model
//! cache is shared by all sessions. `DELETE /api/v1/session` ends a session.

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use forecast_facade::{ForecastConfig, ForecastEngine};
use session::SessionStore;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    engine: Arc<ForecastEngine>,
    sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(engine: ForecastEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            sessions: Arc::new(SessionStore::new()),
        }
    }
}

/// Liveness probe - is the server running?
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Router with all endpoints and middleware
pub fn app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([routes::SESSION_HEADER]);

    Router::new()
        .route("/health", get(liveness))
        // API endpoints
        .route("/api/v1/indicators", get(routes::indicators))
        .route("/api/v1/forecast", post(routes::forecast))
        .route("/api/v1/forecast/csv", get(routes::forecast_csv))
        .route("/api/v1/sentiment", post(routes::sentiment))
        .route(
            "/api/v1/session",
            get(routes::session).delete(routes::end_session),
        )
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "laboratorial_server=info,forecast_core=info,tower_http=info".into()
            }),
        )
        .init();

    let config = ForecastConfig::from_env()?;
    let state = AppState::new(config.build_engine());

    // Provision sentiment resources before the first request
    sentiment_facade::default_pipeline()?;

    // Server configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .context("PORT must be a valid number")?;
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context("Invalid HOST:PORT configuration")?;

    tracing::info!(
        "laboratorial-server v{} listening on {} (models in {:?})",
        env!("CARGO_PKG_VERSION"),
        addr,
        config.model_dir
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
