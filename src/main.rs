//! Pneu CLI application entry point
//!
//! This is the main executable for the pneu catalog browser. It fetches a
//! tire product list from a catalog API and lets the user filter it by
//! free-text search against product and vehicle names.
//!
//! # Features
//!
//! - **Browse Mode**: Interactive card browser with live filtering
//! - **List**: One-shot dump of the whole catalog
//! - **Search**: One-shot filtered listing for scripts and quick checks
//! - **Quiet Mode**: Suppress informational output for scripting
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog interactively (default command)
//! pneu
//! pneu browse
//! pneu browse civic
//!
//! # Print the whole catalog
//! pneu list
//!
//! # Print products matching a query
//! pneu search "eco civic"
//!
//! # Point at a different API for one invocation
//! pneu -e http://staging.example.com list
//!
//! # Quiet mode (only output product names)
//! pneu -q search civic
//! ```
//!
//! # Configuration
//!
//! On first run, pneu will prompt for the catalog API base URL.
//! Configuration is stored in the user's config directory
//! (`~/.config/pneu/config.toml` on Linux).

use colored::Colorize;
use pneu::{
    PneuError,
    catalog::{CatalogClient, Product},
    cli::{Cli, Commands, ConfigCommands},
    config::PneuConfig,
    search::ProductFilterExt,
    ui::tui,
};

type Result<T> = std::result::Result<T, PneuError>;

/// Print one product, honoring quiet mode
///
/// Quiet mode prints the bare name; normal mode prints the name, model,
/// the six metrics, and the compatible vehicles.
fn print_product(product: &Product, quiet: bool) {
    if quiet {
        println!("{}", product.name);
        return;
    }

    println!("  {} [{}]", product.name.bold(), product.model);
    println!(
        "    treadwear {} | speed {} | load {} | traction {} | temp {} | pattern {}",
        product.treadwear,
        product.speed_rating,
        product.load_index,
        product.traction,
        product.temperature,
        product.pattern
    );
    println!("    fits: {}", product.cars.join(", ").dimmed());
}

/// Handle the browse command - interactive card browser
///
/// # Arguments
/// * `client` - Catalog API client
/// * `query` - Optional query to pre-fill the search bar
///
/// # Errors
///
/// Returns `PneuError` if the terminal cannot be set up or the event loop
/// fails.
fn handle_browse_command(client: CatalogClient, query: Option<String>) -> Result<()> {
    tui::run(client, query.unwrap_or_default())
}

/// Handle the list command - print every product in the catalog
///
/// # Arguments
/// * `client` - Catalog API client
/// * `quiet` - If true, print bare product names only
///
/// # Errors
///
/// Returns `PneuError` if the fetch or the decode fails.
fn handle_list_command(client: &CatalogClient, quiet: bool) -> Result<()> {
    let products = client.fetch_products()?;

    if products.is_empty() {
        if !quiet {
            println!("No products in the catalog.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Products in the catalog:");
    }
    for product in &products {
        print_product(product, quiet);
    }

    Ok(())
}

/// Handle the search command - print products matching a query
///
/// Every whitespace-delimited term of the query must match the product
/// name or one of its compatible vehicle names, case-insensitively.
///
/// # Arguments
/// * `client` - Catalog API client
/// * `query` - Free-text query
/// * `quiet` - If true, print bare product names only
///
/// # Errors
///
/// Returns `PneuError` if the fetch or the decode fails.
fn handle_search_command(client: &CatalogClient, query: &str, quiet: bool) -> Result<()> {
    let products = client.fetch_products()?;
    let matches = products.filter_query(query);

    if matches.is_empty() {
        if !quiet {
            println!("No products found matching '{query}'");
        }
        return Ok(());
    }

    if !quiet {
        println!("Found {} product(s) matching '{}':", matches.len(), query);
    }
    for product in &matches {
        print_product(product, quiet);
    }

    Ok(())
}

/// Handle the config command - manage application settings
///
/// # Arguments
/// * `config` - Application configuration
/// * `command` - Specific config subcommand to execute
/// * `quiet` - If true, suppress informational output
///
/// # Errors
///
/// Returns `PneuError` if the configuration key is invalid, value parsing
/// fails, or configuration save fails.
fn handle_config_command(
    mut config: PneuConfig,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let parts: Vec<&str> = setting.splitn(2, '=').collect();
            if parts.len() != 2 {
                return Err(PneuError::InvalidInput(
                    "Invalid format. Use: pneu config set key=value".into(),
                ));
            }

            let key = parts[0].trim();
            let value = parts[1].trim();

            match key {
                "quiet" => {
                    let new_value = value.parse::<bool>().map_err(|_| {
                        PneuError::InvalidInput(format!(
                            "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                        ))
                    })?;
                    config.quiet = new_value;
                    config.save()?;
                    if !quiet {
                        println!("Set quiet = {new_value}");
                    }
                }
                "endpoint" => {
                    config.set_endpoint(value)?;
                    if !quiet {
                        println!("Set endpoint = {}", config.endpoint);
                    }
                }
                _ => {
                    return Err(PneuError::InvalidInput(format!(
                        "Unknown configuration key: '{key}'. Available keys: endpoint, quiet"
                    )));
                }
            }
        }
        ConfigCommands::Get { key } => match key.as_str() {
            "quiet" => println!("{}", config.quiet),
            "endpoint" => println!("{}", config.endpoint),
            _ => {
                return Err(PneuError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: endpoint, quiet"
                )));
            }
        },
    }
    Ok(())
}

/// Main entry point for the pneu application
///
/// Loads configuration, parses command-line arguments, and dispatches to
/// the appropriate command handler.
///
/// # Errors
///
/// Returns `PneuError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<()> {
    let config = PneuConfig::load_or_setup()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;
    let endpoint = cli
        .endpoint
        .clone()
        .unwrap_or_else(|| config.endpoint.clone());

    match cli.get_command() {
        Commands::Config { command } => handle_config_command(config, &command, quiet),
        Commands::Browse { query } => handle_browse_command(CatalogClient::new(endpoint), query),
        Commands::List => handle_list_command(&CatalogClient::new(endpoint), quiet),
        Commands::Search { query } => {
            handle_search_command(&CatalogClient::new(endpoint), &query, quiet)
        }
    }
}
