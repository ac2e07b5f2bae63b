// File: crates/sales-dashboard/src/main.rs
// Summary: Entry point; starts the sales dashboard with default configuration.

use sales_dashboard::{init_tracing, serve, DashboardConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::default();
    init_tracing(config.debug);
    serve(config).await
}
