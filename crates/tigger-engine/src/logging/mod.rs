//! Logging setup.
//!
//! The engine logs through the `log` facade; this module installs the
//! `env_logger` backend.

mod init;

#[cfg(test)]
pub(crate) mod capture;

pub use init::{init_logging, LoggingConfig};
