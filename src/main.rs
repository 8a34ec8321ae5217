//! Step Tracker (steptrack)
//!
//! An MCP server computing activity metrics from step records.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use steptrack::build_info;
use steptrack::config::TrackerConfig;
use steptrack::mcp::TrackerService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays reserved for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("steptrack=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = TrackerConfig::from_env()?;
    eprintln!(
        "Default profile: {:.1} kg, {:.2} m",
        config.default_profile.weight_kg, config.default_profile.height_m
    );

    let service = TrackerService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
