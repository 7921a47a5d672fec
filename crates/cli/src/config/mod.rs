//! CLI configuration module

use clap::Parser;

use crate::{
    commands::Command,
    config::{catalog::CatalogConfig, observability::LoggingConfig},
};

pub(crate) mod catalog;
pub(crate) mod observability;

/// Knit Basket CLI configuration
#[derive(Debug, Parser)]
#[command(name = "knit-basket", about = "Knit Basket storefront", long_about = None)]
pub(crate) struct Config {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Catalog source settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use knit_basket::products::{Category, CategoryFilter};
    use testresult::TestResult;

    use crate::{
        commands::{CartAction, Command},
        config::observability::LogFormat,
    };

    use super::*;

    #[test]
    fn parses_global_options_and_list() -> TestResult {
        let config = Config::try_parse_from([
            "knit-basket",
            "--catalog",
            "data/catalog.yml",
            "--log-format",
            "json",
            "list",
            "--category",
            "decor",
        ])?;

        assert_eq!(config.logging.log_format, LogFormat::Json);
        assert!(config.catalog.path.is_some());
        assert!(matches!(
            config.command,
            Command::List {
                category: CategoryFilter::Only(Category::Decor)
            }
        ));

        Ok(())
    }

    #[test]
    fn parses_cart_actions() -> TestResult {
        let config =
            Config::try_parse_from(["knit-basket", "cart", "add:3", "update:3:-1", "clear"])?;

        let Command::Cart { actions } = config.command else {
            return Err("expected cart command".into());
        };

        assert_eq!(actions.len(), 3);
        assert_eq!(actions.last(), Some(&CartAction::Clear));

        Ok(())
    }

    #[test]
    fn rejects_bad_cart_action() {
        let result = Config::try_parse_from(["knit-basket", "cart", "buy:3"]);

        assert!(result.is_err());
    }

    #[test]
    fn checkout_requires_shipping_details() {
        let result = Config::try_parse_from(["knit-basket", "checkout", "add:1"]);

        assert!(result.is_err());
    }
}
