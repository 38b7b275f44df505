use anyhow::Context;
use tracing::info;

use shift_payroll::api::{AppState, create_router};
use shift_payroll::config::ConfigLoader;
use shift_payroll::logging::init_logging;
use shift_payroll::payroll::Payroll;
use shift_payroll::store::open_store;

const DEFAULT_CONFIG_PATH: &str = "config/payroll.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load(&config_path)?;

    init_logging(config.logging())?;
    info!(config = %config_path, "Configuration loaded");

    let store = open_store(config.storage())?;
    let payroll = Payroll::open(store)?;
    info!(
        employees = payroll.employees().len(),
        work_entries = payroll.work_entries().len(),
        "Payroll records loaded"
    );

    let app = create_router(AppState::new(payroll));
    let address = config.server().bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(address = %address, "Payroll server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Payroll server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
