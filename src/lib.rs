//! # regionsweep - Region discovery and concurrent dispatch
//!
//! The top layer of a cloud fleet-management agent:
//! - **Provider**: lists the account's regions from a home region
//! - **Region**: filters them by an allow-list and runs one isolated task per
//!   region, joining them all before returning
//! - **Monitoring**: operational and debug log streams for a run
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use regionsweep::agent::Agent;
//! use regionsweep::config::RunConfig;
//! use regionsweep::region::{RegionProcessor, RegionWorkUnit};
//! use std::sync::Arc;
//!
//! struct Replacer;
//!
//! #[async_trait::async_trait]
//! impl RegionProcessor for Replacer {
//!     async fn process_region(&self, unit: &RegionWorkUnit) -> regionsweep::Result<()> {
//!         println!("processing {}", unit.region());
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> regionsweep::Result<()> {
//!     let config = RunConfig::from_env()?;
//!     let report = Agent::new(config, Arc::new(Replacer)).connect_and_run().await?;
//!     println!("processed {} regions", report.dispatch.processed);
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod config;
pub mod core;
pub mod monitoring;
pub mod provider;
pub mod region;

pub use core::error::{Error, Result};
