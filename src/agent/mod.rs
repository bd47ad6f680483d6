//! Agent Module
//!
//! Entry point of a run: configure logging, discover regions, dispatch.

pub mod runner;

pub use runner::{Agent, RunReport};
