//! RegionDescriber trait definition.
//!
//! The one control-plane capability the enumerator needs.

use crate::core::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// One entry of a describe-regions response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    /// Region name, absent in partially populated responses
    pub region_name: Option<String>,
    /// Regional API endpoint
    pub endpoint: Option<String>,
    /// Account opt-in status for the region
    pub opt_in_status: Option<String>,
}

impl RegionRecord {
    /// Record carrying only a region name.
    pub fn named(name: &str) -> Self {
        Self {
            region_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Record with no region name.
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Set the endpoint.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }
}

/// Control-plane client able to list the provider's regions.
///
/// Implementations issue one network call per invocation and surface
/// transport or authorization failures as [`Error::Provider`].
#[async_trait]
pub trait RegionDescriber: Send + Sync {
    /// Describe all regions visible to the account.
    async fn describe_regions(&self) -> Result<Vec<RegionRecord>>;
}

/// Describer answering from a fixed response.
///
/// Counts invocations, which makes it usable both for embedding a known
/// region set and for exercising the enumerator.
#[derive(Debug)]
pub struct StaticRegionDescriber {
    response: std::result::Result<Vec<RegionRecord>, String>,
    calls: AtomicUsize,
}

impl StaticRegionDescriber {
    /// Answer with the given records.
    pub fn new(records: Vec<RegionRecord>) -> Self {
        Self {
            response: Ok(records),
            calls: AtomicUsize::new(0),
        }
    }

    /// Answer with records named after each entry.
    pub fn with_names(names: &[&str]) -> Self {
        Self::new(names.iter().map(|n| RegionRecord::named(n)).collect())
    }

    /// Fail every call with a provider error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of describe calls served.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegionDescriber for StaticRegionDescriber {
    async fn describe_regions(&self) -> Result<Vec<RegionRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone().map_err(Error::Provider)
    }
}
