//! Multi-region Module
//!
//! Discovers regions and fans work out to them:
//! - Region enumerator
//! - Concurrent dispatcher
//! - Processor capability and work units

pub mod dispatcher;
pub mod enumerator;
pub mod processor;

pub use dispatcher::{DispatchStats, RegionDispatcher};
pub use enumerator::RegionEnumerator;
pub use processor::{RegionProcessor, RegionWorkUnit};
