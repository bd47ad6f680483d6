//! Region discovery.

use crate::core::{RegionId, Result};
use crate::monitoring::Logger;
use crate::provider::RegionDescriber;
use std::collections::HashSet;
use std::sync::Arc;

/// Lists the provider's regions through a [`RegionDescriber`].
pub struct RegionEnumerator {
    logger: Arc<Logger>,
}

impl RegionEnumerator {
    /// Create an enumerator logging to `logger`.
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// Discover region names, in response order.
    ///
    /// Issues exactly one describe call. Records without a name are skipped
    /// and repeated names are kept once. A failed call is logged and its
    /// error returned unchanged.
    pub async fn enumerate(&self, describer: &dyn RegionDescriber) -> Result<Vec<RegionId>> {
        self.logger.info("Scanning for available regions");

        let records = match describer.describe_regions().await {
            Ok(records) => records,
            Err(err) => {
                self.logger.info(&err);
                return Err(err);
            }
        };

        self.logger.debug(format_args!("{:?}", records));

        let mut seen = HashSet::new();
        let mut regions = Vec::with_capacity(records.len());
        for record in records {
            match record.region_name {
                Some(name) if !name.is_empty() => {
                    if seen.insert(name.clone()) {
                        self.logger.debug(format_args!("Found region {}", name));
                        regions.push(RegionId::new(name));
                    }
                }
                _ => self.logger.debug("Skipping region record without a name"),
            }
        }

        Ok(regions)
    }
}
