use std::sync::Arc;

use bugtrack_backend::cli::{execute_command, Cli};
use bugtrack_backend::config::{init_logging, BootstrapSettings, LoggingConfig, SystemEnvironment};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let env_provider = Arc::new(SystemEnvironment);
    init_logging(&LoggingConfig::from_env_provider(env_provider.as_ref()))?;

    let settings = BootstrapSettings::from_env_provider(env_provider)?;
    tracing::debug!("Loaded settings: {:?}", settings);

    execute_command(cli, &settings).await
}
