// CLI module - process entry commands

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::BootstrapSettings;

/// Bug tracker backend
#[derive(Parser, Debug)]
#[command(name = "bugtrack")]
#[command(about = "Bug tracking REST API server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run migrations and start the HTTP server (default)
    Serve,

    /// Apply pending database migrations and exit
    Migrate,
}

/// Execute CLI command
///
/// No subcommand means `serve`.
pub async fn execute_command(
    cli: Cli,
    settings: &BootstrapSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run_server(settings).await?,
        Commands::Migrate => migrate::run_migrations(settings).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["bugtrack"]).unwrap();

        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_migrate_subcommand_parses() {
        let cli = Cli::try_parse_from(["bugtrack", "migrate"]).unwrap();

        assert_eq!(cli.command, Some(Commands::Migrate));
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["bugtrack", "bootstrap"]).is_err());
    }
}
