use crate::config::toml_config::TomlConfig;
use crate::config::ApiConfig;
use crate::domain::model::SortKey;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "course-cart")]
#[command(about = "Browse the course catalog and check out a cart")]
pub struct CliConfig {
    /// TOML file with an [api] section; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long)]
    pub courses_path: Option<String>,

    #[arg(long)]
    pub cart_path: Option<String>,

    #[arg(long)]
    pub checkout_path: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Save each reservation to the backend cart endpoint
    #[arg(long)]
    pub sync_cart: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the catalog after search and sort
    List {
        #[arg(short, long, default_value = "")]
        search: String,

        /// title, location, price or spacesAvailable
        #[arg(long, default_value = "title")]
        sort: SortKey,

        #[arg(long)]
        desc: bool,
    },
    /// Reserve the given courses and submit the order
    Checkout {
        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        /// Course id; repeat to reserve several seats
        #[arg(long = "course", required = true)]
        courses: Vec<String>,
    },
}

impl CliConfig {
    pub fn log_format(&self) -> LogFormat {
        if self.json_logs {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }

    /// Endpoint settings from the config file (or defaults) with flag overrides applied.
    pub fn resolve(&self) -> Result<ApiConfig> {
        let mut api = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.api,
            None => ApiConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            api.base_url = base_url.clone();
        }
        if let Some(path) = &self.courses_path {
            api.courses_path = path.clone();
        }
        if let Some(path) = &self.cart_path {
            api.cart_path = path.clone();
        }
        if let Some(path) = &self.checkout_path {
            api.checkout_path = path.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            api.timeout_seconds = timeout;
        }
        if self.sync_cart {
            api.sync_cart = true;
        }

        api.validate()?;
        Ok(api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_defaults() {
        let cli = CliConfig::try_parse_from(["course-cart", "list"]).unwrap();
        match &cli.command {
            Command::List { search, sort, desc } => {
                assert_eq!(search, "");
                assert_eq!(*sort, SortKey::Title);
                assert!(!*desc);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.resolve().unwrap(), ApiConfig::default());
        assert_eq!(cli.log_format(), LogFormat::Compact);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::try_parse_from([
            "course-cart",
            "--base-url",
            "http://localhost:3000",
            "--sync-cart",
            "list",
            "--sort",
            "price",
            "--desc",
        ])
        .unwrap();

        let api = cli.resolve().unwrap();
        assert_eq!(api.base_url, "http://localhost:3000");
        assert!(api.sync_cart);
    }

    #[test]
    fn test_checkout_requires_course() {
        let result =
            CliConfig::try_parse_from(["course-cart", "checkout", "--name", "A", "--phone", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_override_fails_resolution() {
        let cli = CliConfig::try_parse_from(["course-cart", "--base-url", "nope", "list"]).unwrap();
        assert!(cli.resolve().is_err());
    }
}
