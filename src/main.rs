use std::env;
use std::path::Path;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod models;
mod services;
mod utils;

use api::alphavantage::AlphaVantageClient;
use api::source::SeriesSource;
use services::dashboard_service::Dashboard;
use utils::errors::DashboardError;

const DEFAULT_SYMBOL: &str = "VOO";
const DEFAULT_REPORT: &str = "dashboard.html";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("drawdash=info".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("📈 Starting drawdash...");

    let symbol = env::var("DASH_SYMBOL").unwrap_or_else(|_| DEFAULT_SYMBOL.to_string());
    let report_path = env::var("DASH_REPORT").unwrap_or_else(|_| DEFAULT_REPORT.to_string());

    let mut dashboard = match resolve_source() {
        Ok(source) => {
            info!("Loading {} daily series ({})", symbol, source.label());
            match source.load(&symbol).await {
                Ok(series) => {
                    info!("✓ Loaded {} points for {}", series.len(), symbol);
                    Dashboard::new(symbol, source.label(), series)
                }
                Err(e) => {
                    error!("Failed to load series for {}: {}", symbol, e);
                    Dashboard::empty(symbol, e.user_message())
                }
            }
        }
        Err(e) => {
            warn!("No data source available: {}", e);
            Dashboard::empty(symbol, e.user_message())
        }
    };

    // Initial render at the default range, then hand over to the selector
    let report_path = Path::new(&report_path);
    let default_tag = dashboard.current_range().tag();
    if let Err(e) = commands::range::execute(&mut dashboard, default_tag, report_path) {
        error!("Initial render failed: {}", e);
    }
    commands::help::execute();

    if let Err(e) = commands::run(&mut dashboard, report_path) {
        error!("Selector loop ended with an error: {}", e);
    }
}

/// Pick the injected data source: the fixed sample when `DASH_SOURCE`
/// says so, otherwise the live API keyed from the environment. A missing
/// key surfaces as `MissingCredential`, which the dashboard renders as
/// its explicit missing-key state.
fn resolve_source() -> Result<SeriesSource, DashboardError> {
    match env::var("DASH_SOURCE").ok().as_deref() {
        Some("sample") => Ok(SeriesSource::Sample),
        _ => {
            let api_key = env::var("ALPHAVANTAGE_API_KEY").unwrap_or_default();
            Ok(SeriesSource::AlphaVantage(AlphaVantageClient::new(api_key)?))
        }
    }
}
