//! Salary input service entry point.
//!
//! Serves the validation engine over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use salary_input::api::{AppState, create_router};
use salary_input::config::ConfigLoader;

#[derive(Parser)]
#[command(name = "salary-input-service")]
#[command(about = "Validates and enriches salary input for the salary calculator")]
#[command(version)]
struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "5000", env = "PORT")]
    port: u16,

    /// Directory containing service.yaml; built-in defaults when omitted
    #[arg(short, long, env = "SALARY_CONFIG_DIR")]
    config_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salary_input=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &cli.config_dir {
        Some(dir) => ConfigLoader::load(dir)?,
        None => {
            tracing::info!("No configuration directory given, using defaults");
            ConfigLoader::default()
        }
    };

    let app = create_router(AppState::new(config)).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(cli.host.parse()?, cli.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
