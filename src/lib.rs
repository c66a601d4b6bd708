pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpCourseApi;
pub use config::{toml_config::TomlConfig, ApiConfig};
pub use core::view_model::CartViewModel;
pub use domain::model::{CartItem, CheckoutForm, Course, Page, SortKey, SortOrder};
pub use domain::ports::{ConfigProvider, CourseApi};
pub use utils::error::{CartError, Result};
