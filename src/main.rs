use clap::Parser;
use product_backend::cli::{execute_command, Cli};
use product_backend::config::{init_logging, BootstrapSettings, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_logging(&LoggingConfig::from_env())?;

    let settings = BootstrapSettings::from_env()?;
    tracing::debug!("Loaded bootstrap settings: {:?}", settings);

    execute_command(cli, &settings).await
}
