//! Monitoring Module
//!
//! Provides the logging context shared by every stage of a run:
//! - Operational stream
//! - Debug stream, gated by `REGIONSWEEP_DEBUG`

pub mod logging;

pub use logging::{
    debug_enabled_from_env, debug_toggle, LogBuffer, LogConfig, LogDestination, LogFormat,
    LogStream, Logger, DEBUG_ENV_VAR,
};
