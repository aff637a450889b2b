// CLI module - process entry points

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::BootstrapSettings;

/// Product backend CLI
#[derive(Parser, Debug)]
#[command(name = "product-backend")]
#[command(about = "Product catalogue CRUD backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run migrations and serve the HTTP API (default)
    Serve,

    /// Run pending database migrations and exit
    Migrate,
}

/// Execute CLI command
///
/// Routes the parsed CLI command to the appropriate handler function.
/// Without a subcommand the server is started.
pub async fn execute_command(
    cli: Cli,
    settings: &BootstrapSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::serve(settings).await?,
        Commands::Migrate => migrate::run_migrations(settings).await?,
    }

    Ok(())
}
