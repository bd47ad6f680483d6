//! Run configuration.
//!
//! Built once by the caller before a run and shared read-only by every
//! region unit.

use crate::core::{Error, RegionId, Result};
use crate::monitoring::LogConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the home region.
pub const MAIN_REGION_ENV_VAR: &str = "REGIONSWEEP_MAIN_REGION";

/// Environment variable holding the region allow-list.
pub const REGIONS_ENV_VAR: &str = "REGIONSWEEP_REGIONS";

/// Home region used when none is configured.
pub const DEFAULT_MAIN_REGION: &str = "us-east-1";

/// Configuration of one run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Region used to list all the other regions
    pub main_region: String,
    /// Regions enabled for processing; empty enables all of them.
    /// Entries ending in `*` match by prefix.
    pub regions: Vec<String>,
    /// Log destination and format
    pub logging: LogConfig,
}

impl RunConfig {
    /// Create a configuration enumerating from the given home region.
    pub fn new(main_region: &str) -> Self {
        Self {
            main_region: main_region.to_string(),
            ..Default::default()
        }
    }

    /// Set the allow-list.
    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = regions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the logging configuration.
    pub fn with_logging(mut self, logging: LogConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Split a comma or whitespace separated region list.
    pub fn parse_region_list(list: &str) -> Vec<String> {
        list.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(region) = lookup(MAIN_REGION_ENV_VAR) {
            config.main_region = region.trim().to_string();
        }
        if let Some(list) = lookup(REGIONS_ENV_VAR) {
            config.regions = Self::parse_region_list(&list);
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.main_region.trim().is_empty() {
            return Err(Error::Config("main region cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Whether the allow-list admits a region.
    pub fn is_region_allowed(&self, region: &RegionId) -> bool {
        if self.regions.is_empty() {
            return true;
        }
        let name = region.as_str();
        self.regions.iter().any(|entry| match entry.strip_suffix('*') {
            Some(prefix) => name.starts_with(prefix),
            None => entry == name,
        })
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            main_region: DEFAULT_MAIN_REGION.to_string(),
            regions: Vec::new(),
            logging: LogConfig::default(),
        }
    }
}
