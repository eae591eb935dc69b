use chainbridge_widgets::config::WidgetConfig;
use chainbridge_widgets::server::ChainBridgeTools;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the MCP stream, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = WidgetConfig::from_env();
    info!(base_url = %config.base_url, "starting chainbridge-widgets");

    let tools = ChainBridgeTools::from_config(&config)?;
    let service = tools
        .serve(stdio())
        .await
        .inspect_err(|e| error!("failed to start MCP server: {}", e))?;

    let reason = service.waiting().await?;
    info!(?reason, "MCP session ended");
    Ok(())
}
