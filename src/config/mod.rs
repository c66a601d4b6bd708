#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://mylibrary-backend.onrender.com";

/// Where the backend lives and how to talk to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub courses_path: String,
    pub cart_path: String,
    pub checkout_path: String,
    pub timeout_seconds: u64,
    pub sync_cart: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            courses_path: "/api/courses".to_string(),
            cart_path: "/api/cart".to_string(),
            checkout_path: "/checkout".to_string(),
            timeout_seconds: 30,
            sync_cart: false,
        }
    }
}

impl ApiConfig {
    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl ConfigProvider for ApiConfig {
    fn courses_url(&self) -> String {
        self.join(&self.courses_path)
    }

    fn cart_url(&self) -> String {
        self.join(&self.cart_path)
    }

    fn checkout_url(&self) -> String {
        self.join(&self.checkout_path)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn sync_cart(&self) -> bool {
        self.sync_cart
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.base_url)?;
        validation::validate_endpoint_path("api.courses_path", &self.courses_path)?;
        validation::validate_endpoint_path("api.cart_path", &self.cart_path)?;
        validation::validate_endpoint_path("api.checkout_path", &self.checkout_path)?;
        validation::validate_range("api.timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}
