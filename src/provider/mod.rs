//! Provider Module
//!
//! Adapters onto the cloud provider's control plane:
//! - `RegionDescriber` capability
//! - EC2 implementation (feature `aws`)
//! - Fixed-response implementation

pub mod client;
#[cfg(feature = "aws")]
pub mod ec2;

pub use client::{RegionDescriber, RegionRecord, StaticRegionDescriber};
#[cfg(feature = "aws")]
pub use ec2::Ec2RegionDescriber;
