//! Apivet suite binary.

use std::sync::Arc;

use apivet::{Scenarios, run_all};
use apivet_infrastructure::ReqwestHttpClient;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment
    let base_url =
        std::env::var("APIVET_BASE_URL").unwrap_or_else(|_| "https://reqres.in".to_string());
    let base = Url::parse(&base_url)?;

    tracing::info!("Starting Apivet suite v{}", env!("CARGO_PKG_VERSION"));

    let client = Arc::new(ReqwestHttpClient::new()?);
    let scenarios = Scenarios::new(client, base);
    let report = run_all(&scenarios).await;

    println!("{}", report.summary());

    if report.all_passed() {
        Ok(())
    } else {
        Err(format!(
            "{} of {} scenarios failed",
            report.failed_count(),
            report.outcomes.len()
        )
        .into())
    }
}
