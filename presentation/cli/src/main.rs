use clap::Parser;
use dotenvy::dotenv;

mod app;
mod cli;
mod media;
mod config {
    pub mod app_config;
    pub mod inference_config;
}
mod render {
    pub mod chart;
    pub mod table;
}
mod setup {
    pub mod dependency_injection;
}

use app::App;
use cli::Cli;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// CLI Entry Point
///
/// Initializes the application, wires dependencies, and runs the
/// interactive photo-analysis loop.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Parse command-line arguments
    let cli = Cli::parse();

    // 2. Initialize tracing with RUST_LOG env filter
    let default_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load environment variables
    dotenv().ok();

    // 4. Load configuration, command-line flags win over environment
    let mut config = AppConfig::from_env();
    if let Some(endpoint) = &cli.endpoint {
        config.inference.base_url = endpoint.trim_end_matches('/').to_string();
    }
    if let Some(output_dir) = &cli.output_dir {
        config.output_dir = output_dir.clone();
    }

    // 5. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 6. Run the interactive loop
    App::run(cli, config, container).await?;

    Ok(())
}
