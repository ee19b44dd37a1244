//! Interactive setup wizard for first-time configuration
//!
//! Prompts for the catalog API base URL when pneu is run for the first
//! time and writes the initial configuration file.

use super::{DEFAULT_ENDPOINT, PneuConfig};
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};

/// Interactive first-time setup - prompts for the catalog endpoint
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or the configuration
/// cannot be saved.
pub fn first_time_setup() -> Result<PneuConfig, ConfigError> {
    println!("Welcome to pneu! Let's point it at your catalog API.\n");

    let endpoint: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Catalog API base URL")
        .default(DEFAULT_ENDPOINT.to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = PneuConfig {
        endpoint: endpoint.trim().trim_end_matches('/').to_string(),
        quiet: false,
    };

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_module_compiles() {
        // Ensures the module compiles and the function signature is correct
        let _: fn() -> Result<PneuConfig, ConfigError> = first_time_setup;
    }
}
