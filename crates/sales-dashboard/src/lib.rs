// File: crates/sales-dashboard/src/lib.rs
// Summary: Dashboard crate; wires config, shared state, page layout, and HTTP routes into an axum server.

pub mod api;
pub mod config;
pub mod layout;
pub mod state;
pub mod surface;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

pub use config::DashboardConfig;
pub use state::AppState;

/// All dashboard routes over `state`.
pub fn router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route("/api/chart", get(api::chart_json))
        .route("/api/chart.svg", get(api::chart_svg))
        .route("/api/selection", post(api::selection));
    #[cfg(feature = "raster")]
    let router = router.route("/api/chart.png", get(api::chart_png));
    router.with_state(state)
}

/// Load data, bind, and serve until the process is stopped.
pub async fn serve(config: DashboardConfig) -> Result<()> {
    let state = Arc::new(AppState::from_config(&config));
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        url = %format!("http://{local_addr}"),
        region_filter = config.region_filter,
        "serving sales dashboard"
    );
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Install the global tracing subscriber (compact fmt output).
pub fn init_tracing(debug: bool) {
    tracing_subscriber::registry()
        .with(build_env_filter(debug))
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}

fn build_env_filter(debug: bool) -> tracing_subscriber::EnvFilter {
    if debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::new("info")
    }
}
