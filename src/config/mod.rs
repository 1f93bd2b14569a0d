//! Configuration loading and management

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

/// Directory endpoint the listing reads from when nothing else is configured
pub const DEFAULT_DIRECTORY_URL: &str = "https://foodapp-0rh9.onrender.com/api/restaurants";

/// Number of restaurants shown in the featured carousel
pub const DEFAULT_FEATURED_COUNT: usize = 5;

/// Placeholder images bundled with the client, in display order
pub const DEFAULT_PLACEHOLDER_IMAGES: &[&str] = &[
    "/images/restaurants/placeholder-1.jpg",
    "/images/restaurants/placeholder-2.jpg",
    "/images/restaurants/placeholder-3.jpg",
    "/images/restaurants/placeholder-4.jpg",
    "/images/restaurants/placeholder-5.jpg",
    "/images/restaurants/placeholder-6.jpg",
];

/// Where the restaurant directory lives
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Full URL of the directory endpoint
    pub url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectoryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DIRECTORY_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

/// How a restaurant without an image is assigned a placeholder
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FallbackStrategy {
    /// Placeholder `index mod count` by position in the rendered sequence
    #[default]
    Position,

    /// Placeholder chosen from the restaurant id, stable across sequences
    Identity,
}

/// Listing behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    pub featured_count: usize,

    /// Ordered placeholder image set; must not be empty
    pub placeholder_images: Vec<String>,

    pub fallback: FallbackStrategy,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            featured_count: DEFAULT_FEATURED_COUNT,
            placeholder_images: DEFAULT_PLACEHOLDER_IMAGES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            fallback: FallbackStrategy::default(),
        }
    }
}

/// Menu-item store connection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    pub mongodb_uri: String,
    pub database: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            database: "food-delivery".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub directory: DirectoryConfig,
    pub view: ViewConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path}"))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("Invalid YAML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `FOOD_*` environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from the environment where the variable is set
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(url) = var("FOOD_DIRECTORY_URL") {
            self.directory.url = url;
        }
        if let Some(timeout) = parse_var("FOOD_DIRECTORY_TIMEOUT_SECS")? {
            self.directory.timeout_secs = timeout;
        }
        if let Some(count) = parse_var("FOOD_FEATURED_COUNT")? {
            self.view.featured_count = count;
        }
        if let Some(uri) = var("FOOD_MONGODB_URI") {
            self.store.mongodb_uri = uri;
        }
        if let Some(database) = var("FOOD_MONGODB_DATABASE") {
            self.store.database = database;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.directory.url.trim().is_empty() {
            bail!("directory.url must not be empty");
        }
        if self.view.placeholder_images.is_empty() {
            bail!("view.placeholder_images must contain at least one image");
        }
        Ok(())
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_var<T: FromStr>(key: &str) -> Result<Option<T>>
where
    T::Err: Display,
{
    var(key)
        .map(|raw| {
            raw.parse()
                .map_err(|e| anyhow::anyhow!("Invalid {key} value {raw:?}: {e}"))
        })
        .transpose()
}
