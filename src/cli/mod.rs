//! CLI interface and argument parsing

pub mod commands;

use clap::{Parser, Subcommand};

/// Leadbook - buyer-lead management service
#[derive(Parser, Debug)]
#[command(name = "leadbook")]
#[command(version, about, long_about = None)]
#[command(author = "Leadbook Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "leadbook.toml", env = "LEADBOOK_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LEADBOOK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve(commands::serve::ServeArgs),

    /// Import leads from a CSV file
    Import(commands::import::ImportArgs),

    /// Export leads to a CSV file
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Commands {
    /// Commands that run without a configuration file
    pub fn needs_config(&self) -> bool {
        !matches!(self, Commands::Init(_) | Commands::ValidateConfig(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::parse_from(["leadbook", "serve"]);
        assert_eq!(cli.config, "leadbook.toml");
        assert!(matches!(cli.command, Commands::Serve(ref args) if args.listen.is_none()));
    }

    #[test]
    fn test_cli_parse_serve_listen() {
        let cli = Cli::parse_from(["leadbook", "serve", "--listen", "127.0.0.1:9000"]);
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.listen.as_deref(), Some("127.0.0.1:9000")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config_and_level() {
        let cli = Cli::parse_from([
            "leadbook",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
            "validate-config",
        ]);
        assert_eq!(cli.config, "custom.toml");
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(!cli.command.needs_config());
    }

    #[test]
    fn test_cli_parse_import() {
        let cli = Cli::parse_from(["leadbook", "import", "leads.csv"]);
        match cli.command {
            Commands::Import(args) => {
                assert_eq!(args.file, PathBuf::from("leads.csv"));
                assert!(!args.all_errors);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_export_filters() {
        let cli = Cli::parse_from([
            "leadbook",
            "export",
            "--output",
            "out.csv",
            "--status",
            "new",
            "--property-type",
            "condo",
        ]);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.output, Some(PathBuf::from("out.csv")));
                assert_eq!(args.status.as_deref(), Some("new"));
                assert_eq!(args.property_type.as_deref(), Some("condo"));
                assert!(args.timeline.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["leadbook", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref args) if args.force));
    }
}
