//! Per-region processing capability.
//!
//! The dispatcher hands every discovered region to a [`RegionProcessor`]
//! wrapped in a [`RegionWorkUnit`]. What happens inside a region, such as
//! replacing instances, belongs to the processor.

use crate::config::RunConfig;
use crate::core::{RegionId, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// One region bound to the run configuration.
///
/// Built by the dispatcher right before launching the unit's task and owned
/// by that task alone.
#[derive(Debug)]
pub struct RegionWorkUnit {
    region: RegionId,
    config: Arc<RunConfig>,
}

impl RegionWorkUnit {
    /// Bind a region to the shared configuration.
    pub fn new(region: RegionId, config: Arc<RunConfig>) -> Self {
        Self { region, config }
    }

    /// The region this unit works on.
    pub fn region(&self) -> &RegionId {
        &self.region
    }

    /// The run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Whether the configured allow-list admits this region.
    pub fn is_allowed(&self) -> bool {
        self.config.is_region_allowed(&self.region)
    }
}

/// Business logic run once per enabled region.
///
/// Both methods may block for as long as they need. Errors returned by
/// `process_region` are not observed by the dispatcher.
#[async_trait]
pub trait RegionProcessor: Send + Sync {
    /// Whether the unit's region should be processed this run.
    ///
    /// Defaults to the configuration's allow-list.
    async fn enabled(&self, unit: &RegionWorkUnit) -> bool {
        unit.is_allowed()
    }

    /// Process one region.
    async fn process_region(&self, unit: &RegionWorkUnit) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    #[async_trait]
    impl RegionProcessor for Noop {
        async fn process_region(&self, _unit: &RegionWorkUnit) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_default_enabled_uses_allow_list() {
        let config = Arc::new(RunConfig::new("us-east-1").with_regions(["eu-west-1"]));

        let allowed = RegionWorkUnit::new(RegionId::new("eu-west-1"), config.clone());
        let denied = RegionWorkUnit::new(RegionId::new("us-west-2"), config);

        assert!(Noop.enabled(&allowed).await);
        assert!(!Noop.enabled(&denied).await);
    }

    #[test]
    fn test_work_unit_accessors() {
        let config = Arc::new(RunConfig::new("eu-central-1"));
        let unit = RegionWorkUnit::new(RegionId::new("ap-northeast-1"), config);

        assert_eq!(unit.region(), &RegionId::new("ap-northeast-1"));
        assert_eq!(unit.config().main_region, "eu-central-1");
        assert!(unit.is_allowed());
    }
}
