// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use meter_report::application::report_service::ReportService;
use meter_report::infrastructure::config::{load_graph_pages_config, load_statistics_config};
use meter_report::infrastructure::influx_catalog::InfluxCatalog;
use meter_report::presentation::app_state::AppState;
use meter_report::presentation::handlers::{health_check, list_meters, summary_report};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let statistics_config = load_statistics_config()?;
    let pages_config = load_graph_pages_config()?;
    let settings = statistics_config.statistics;
    let server_index = settings.server_index;

    // Create catalog (infrastructure layer)
    let catalog = Arc::new(InfluxCatalog::new(
        settings.host,
        settings.token,
        settings.database,
        settings.retention_policy,
    ));

    // Create services (application layer)
    let report_service = ReportService::new(catalog, pages_config, server_index);

    // Create application state
    let state = Arc::new(AppState { report_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/meters", get(list_meters))
        .route("/reports/summary", get(summary_report))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
    println!("Starting meter-report service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
