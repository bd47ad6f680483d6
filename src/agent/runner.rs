//! Run orchestration.
//!
//! One run lists the provider's regions from the home region and processes
//! every enabled region concurrently. A failed region listing is the only
//! thing that aborts a run.

use crate::config::RunConfig;
use crate::core::{now, Result, Timestamp};
use crate::monitoring::Logger;
use crate::provider::RegionDescriber;
use crate::region::{DispatchStats, RegionDispatcher, RegionEnumerator, RegionProcessor};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Summary of a completed run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunReport {
    /// Run identifier
    pub run_id: Uuid,
    /// When the run started
    pub started_at: Timestamp,
    /// When the last region unit finished
    pub finished_at: Timestamp,
    /// Regions returned by the provider
    pub regions_discovered: usize,
    /// Dispatch counts
    pub dispatch: DispatchStats,
}

/// Fleet agent driving one processor across all regions.
pub struct Agent {
    config: Arc<RunConfig>,
    processor: Arc<dyn RegionProcessor>,
    logger: Option<Arc<Logger>>,
}

impl Agent {
    /// Create an agent.
    pub fn new(config: RunConfig, processor: Arc<dyn RegionProcessor>) -> Self {
        Self {
            config: Arc::new(config),
            processor,
            logger: None,
        }
    }

    /// Use a prepared logger instead of building one from the configuration.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(Arc::new(logger));
        self
    }

    /// The run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run once against the given describer.
    pub async fn run(&self, describer: &dyn RegionDescriber) -> Result<RunReport> {
        let logger = match &self.logger {
            Some(logger) => logger.clone(),
            None => Arc::new(Logger::from_env(&self.config.logging)?),
        };

        let run_id = Uuid::new_v4();
        let started_at = now();
        logger.debug(format_args!("Run {} with {:?}", run_id, self.config));

        let regions = RegionEnumerator::new(logger.clone())
            .enumerate(describer)
            .await?;

        let dispatch = RegionDispatcher::new(self.processor.clone(), logger)
            .dispatch(&regions, self.config.clone())
            .await;

        Ok(RunReport {
            run_id,
            started_at,
            finished_at: now(),
            regions_discovered: regions.len(),
            dispatch,
        })
    }

    /// Connect to EC2 in the configured home region, then run.
    #[cfg(feature = "aws")]
    pub async fn connect_and_run(&self) -> Result<RunReport> {
        let describer = crate::provider::Ec2RegionDescriber::connect(&self.config.main_region).await?;
        self.run(&describer).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::monitoring::{LogBuffer, LogConfig, LogDestination};
    use crate::provider::{RegionRecord, StaticRegionDescriber};
    use crate::region::RegionWorkUnit;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counting {
        processed: AtomicUsize,
    }

    #[async_trait]
    impl RegionProcessor for Counting {
        async fn process_region(&self, _unit: &RegionWorkUnit) -> Result<()> {
            self.processed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn captured() -> (Logger, LogBuffer) {
        let buffer = LogBuffer::new();
        let mut config = LogConfig::to(LogDestination::Buffer(buffer.clone()));
        config.timestamps = false;
        (Logger::configure(&config, false).unwrap(), buffer)
    }

    #[tokio::test]
    async fn test_run_processes_enabled_regions() {
        let processor = Arc::new(Counting::default());
        let config = RunConfig::new("us-east-1").with_regions(["eu-*", "us-east-1"]);
        let agent = Agent::new(config, processor.clone()).with_logger(Logger::disabled());

        let describer = StaticRegionDescriber::new(vec![
            RegionRecord::named("us-east-1"),
            RegionRecord::named("eu-west-1"),
            RegionRecord::unnamed(),
            RegionRecord::named("eu-central-1"),
            RegionRecord::named("ap-south-1"),
        ]);
        let report = agent.run(&describer).await.unwrap();

        assert_eq!(report.regions_discovered, 4);
        assert_eq!(report.dispatch.launched, 4);
        assert_eq!(report.dispatch.processed, 3);
        assert_eq!(report.dispatch.skipped, 1);
        assert_eq!(processor.processed.load(Ordering::SeqCst), 3);
        assert!(report.finished_at >= report.started_at);
    }

    #[tokio::test]
    async fn test_enumeration_failure_aborts_without_dispatch() {
        let processor = Arc::new(Counting::default());
        let (logger, buffer) = captured();
        let agent = Agent::new(RunConfig::default(), processor.clone()).with_logger(logger);

        let describer = StaticRegionDescriber::failing("UnauthorizedOperation");
        let err = agent.run(&describer).await.unwrap_err();

        assert!(matches!(err, Error::Provider(ref m) if m == "UnauthorizedOperation"));
        assert_eq!(processor.processed.load(Ordering::SeqCst), 0);
        let failures = buffer
            .lines()
            .into_iter()
            .filter(|l| l.contains("UnauthorizedOperation"))
            .count();
        assert_eq!(failures, 1);
    }

    #[tokio::test]
    async fn test_no_regions_is_a_successful_run() {
        let processor = Arc::new(Counting::default());
        let agent = Agent::new(RunConfig::default(), processor).with_logger(Logger::disabled());

        let report = agent.run(&StaticRegionDescriber::new(Vec::new())).await.unwrap();
        assert_eq!(report.regions_discovered, 0);
        assert_eq!(report.dispatch, DispatchStats::default());
    }

    #[tokio::test]
    async fn test_logger_built_from_config() {
        let buffer = LogBuffer::new();
        let mut log_config = LogConfig::to(LogDestination::Buffer(buffer.clone()));
        log_config.timestamps = false;
        let config = RunConfig::new("us-east-1").with_logging(log_config);
        let agent = Agent::new(config, Arc::new(Counting::default()));

        agent
            .run(&StaticRegionDescriber::with_names(&["eu-west-1"]))
            .await
            .unwrap();

        let contents = buffer.contents();
        assert!(contents.contains("Scanning for available regions"));
        assert!(contents.contains("Enabled to run in eu-west-1, processing region."));
    }
}
