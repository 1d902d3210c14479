use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use city_summary::{CityInfoClient, CitySummaryServer, Config, SummaryFileWriter};
use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// City Summary Generator
#[derive(Debug, Parser)]
#[command(name = "city-summary", version, about)]
struct Cli {
    /// Name of the city to get the summary for
    #[arg(required_unless_present = "mcp")]
    city: Option<String>,

    /// Serve the summary tools over MCP on stdio instead of writing one file
    #[arg(long, conflicts_with = "city")]
    mcp: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "city_summary=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("{:#}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let client = Arc::new(CityInfoClient::new(config)?);
    let writer = SummaryFileWriter::new(client.clone(), client.clone(), std::env::current_dir()?);

    if cli.mcp {
        tracing::info!("Starting MCP city summary server");

        let server = CitySummaryServer::new(client.clone(), client, writer)
            .serve(rmcp::transport::stdio())
            .await?;
        server.waiting().await?;

        tracing::info!("Server shutdown complete");
        return Ok(ExitCode::SUCCESS);
    }

    let city = cli.city.unwrap_or_default();
    match writer.create_summary_file(&city).await {
        Ok(path) => {
            println!("Summary created, path: {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
