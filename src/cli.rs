//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for pneu using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive card browser with live filtering (default)
//! - **list**: Fetch the catalog once and print every product
//! - **search**: Fetch the catalog once and print products matching a query
//! - **config**: Manage application settings (endpoint, quiet)
//!
//! # Design Features
//!
//! - Browse is the default when no subcommand is given
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--endpoint` flag to override the configured API base URL
//! - Command aliases (e.g., `b` for `browse`, `s` for `search`)

use clap::{Parser, Subcommand};

/// Browse and search a tire product catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "pneu", version, about)]
pub struct Cli {
    /// Suppress informational output (print bare product names only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the configured catalog API base URL
    #[arg(short, long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Browse the catalog interactively (default)
    #[command(alias = "b")]
    Browse {
        /// Initial query to pre-fill the search bar
        query: Option<String>,
    },

    /// Fetch the catalog once and print every product
    #[command(alias = "ls")]
    List,

    /// Fetch the catalog once and print products matching a query
    #[command(alias = "s")]
    Search {
        /// Free-text query; every term must match the product name or a
        /// compatible vehicle name
        query: String,
    },

    /// Manage application settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value (key=value)
    Set {
        /// Setting in key=value form. Available keys: endpoint, quiet
        setting: String,
    },
    /// Print a configuration value
    Get {
        /// Key to print. Available keys: endpoint, quiet
        key: String,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The selected command, defaulting to browse with no initial query
    #[must_use]
    pub fn get_command(self) -> Commands {
        self.command.unwrap_or(Commands::Browse { query: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_browse() {
        let cli = Cli::try_parse_from(["pneu"]).unwrap();
        assert_eq!(cli.get_command(), Commands::Browse { query: None });
    }

    #[test]
    fn test_browse_accepts_initial_query() {
        let cli = Cli::try_parse_from(["pneu", "browse", "civic"]).unwrap();
        assert_eq!(
            cli.get_command(),
            Commands::Browse {
                query: Some("civic".to_string())
            }
        );
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["pneu", "search"]).is_err());

        let cli = Cli::try_parse_from(["pneu", "search", "eco pro"]).unwrap();
        assert_eq!(
            cli.get_command(),
            Commands::Search {
                query: "eco pro".to_string()
            }
        );
    }

    #[test]
    fn test_aliases() {
        let cli = Cli::try_parse_from(["pneu", "s", "civic"]).unwrap();
        assert!(matches!(cli.get_command(), Commands::Search { .. }));

        let cli = Cli::try_parse_from(["pneu", "ls"]).unwrap();
        assert_eq!(cli.get_command(), Commands::List);

        let cli = Cli::try_parse_from(["pneu", "b"]).unwrap();
        assert!(matches!(cli.get_command(), Commands::Browse { .. }));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pneu", "list", "--quiet"]).unwrap();
        assert!(cli.quiet);

        let cli =
            Cli::try_parse_from(["pneu", "list", "--endpoint", "http://api.example.com"]).unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("http://api.example.com"));
    }

    #[test]
    fn test_config_set_and_get() {
        let cli = Cli::try_parse_from(["pneu", "config", "set", "quiet=true"]).unwrap();
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::Set {
                    setting: "quiet=true".to_string()
                }
            }
        );

        let cli = Cli::try_parse_from(["pneu", "config", "get", "endpoint"]).unwrap();
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::Get {
                    key: "endpoint".to_string()
                }
            }
        );
    }
}
