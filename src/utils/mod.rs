//! Utility modules: persistence, config, logging.

pub mod config;
pub mod logging;
pub mod persistence;

pub use config::Config;
