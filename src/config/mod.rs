//! Configuration Module
//!
//! Run configuration and its loaders.

pub mod run;

pub use run::{RunConfig, DEFAULT_MAIN_REGION, MAIN_REGION_ENV_VAR, REGIONS_ENV_VAR};
