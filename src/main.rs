use axum::{
    routing::{get, post},
    Router,
};
use highlights::{highlights as routes, AppState, EngineConfig, HighlightEngine, HighlightService};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG_PATH_ENV: &str = "HIGHLIGHTS_CONFIG";
const ADDR_ENV: &str = "HIGHLIGHTS_ADDR";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "highlights=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting highlight tagging service");

    let config = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => match EngineConfig::load(&path) {
            Ok(config) => {
                info!(%path, "Loaded engine configuration");
                config
            }
            Err(err) => {
                error!(%path, %err, "Invalid engine configuration");
                std::process::exit(1);
            }
        },
        Err(_) => {
            info!("No {} set, using default thresholds", CONFIG_PATH_ENV);
            EngineConfig::default()
        }
    };

    let engine = Arc::new(HighlightEngine::new(config));
    info!(detectors = ?engine.detector_names(), "Highlight engine ready");

    let app_state = AppState::new(HighlightService::new(engine));

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/highlights/tag", post(routes::tag_game))
        .route("/highlights/batch", post(routes::tag_games))
        .route("/highlights/impact-score", post(routes::compute_impact))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(%addr, %err, "Failed to bind listener");
            std::process::exit(1);
        }
    };
    info!("Server running on http://{}", addr);

    if let Err(err) = axum::serve(listener, app).await {
        error!(%err, "Server stopped");
    }
}
