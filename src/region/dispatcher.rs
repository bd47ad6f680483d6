//! Concurrent per-region dispatch.
//!
//! Every region gets its own task. Tasks share nothing mutable: each owns its
//! [`RegionWorkUnit`], and the configuration, processor and logger are
//! read-only behind `Arc`s. The dispatcher joins all of them before
//! returning, and a failing or panicking task never affects the others.
//! Dropping the dispatch future detaches the launched tasks; it never
//! cancels them.

use crate::config::RunConfig;
use crate::core::RegionId;
use crate::monitoring::Logger;
use crate::region::processor::{RegionProcessor, RegionWorkUnit};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Counts gathered while joining the region tasks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchStats {
    /// Tasks launched, one per region
    pub launched: usize,
    /// Enabled regions whose processing returned, successfully or not
    pub processed: usize,
    /// Regions that were not enabled
    pub skipped: usize,
}

impl DispatchStats {
    /// Tasks that panicked before reporting back.
    pub fn aborted(&self) -> usize {
        self.launched - self.processed - self.skipped
    }
}

enum UnitOutcome {
    Processed,
    Skipped,
}

/// Fans regions out to a [`RegionProcessor`].
pub struct RegionDispatcher {
    processor: Arc<dyn RegionProcessor>,
    logger: Arc<Logger>,
}

impl RegionDispatcher {
    /// Create a dispatcher.
    pub fn new(processor: Arc<dyn RegionProcessor>, logger: Arc<Logger>) -> Self {
        Self { processor, logger }
    }

    /// Run one task per region and wait for all of them.
    ///
    /// Tasks are launched in the order of `regions`; they complete in no
    /// particular order. Never fails.
    pub async fn dispatch(&self, regions: &[RegionId], config: Arc<RunConfig>) -> DispatchStats {
        let units: Vec<_> = regions
            .iter()
            .map(|region| {
                let unit = RegionWorkUnit::new(region.clone(), config.clone());
                tokio::spawn(run_unit(unit, self.processor.clone(), self.logger.clone()))
            })
            .collect();

        let mut stats = DispatchStats {
            launched: regions.len(),
            ..Default::default()
        };

        for unit in units {
            match unit.await {
                Ok(UnitOutcome::Processed) => stats.processed += 1,
                Ok(UnitOutcome::Skipped) => stats.skipped += 1,
                // A panicked unit is contained by its task.
                Err(_) => {}
            }
        }

        stats
    }
}

async fn run_unit(
    unit: RegionWorkUnit,
    processor: Arc<dyn RegionProcessor>,
    logger: Arc<Logger>,
) -> UnitOutcome {
    if processor.enabled(&unit).await {
        logger.info(format_args!(
            "Enabled to run in {}, processing region.",
            unit.region()
        ));
        let _ = processor.process_region(&unit).await;
        UnitOutcome::Processed
    } else {
        logger.debug(format_args!("Not enabled to run in {}", unit.region()));
        logger.debug(format_args!(
            "List of enabled regions: {:?}",
            unit.config().regions
        ));
        UnitOutcome::Skipped
    }
}
