//! # Config Crate
//!
//! Centralized configuration for the concentric rind pipeline.
//! All magic numbers and tunable parameters are defined here so that
//! downstream crates stay declarative and literals are not scattered.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_SHELL_COUNT};
//! use config::ShellConfig;
//!
//! let cfg = ShellConfig::default();
//! cfg.validate().expect("defaults are valid");
//! assert_eq!(cfg.shell_count, DEFAULT_SHELL_COUNT);
//! assert!(EPSILON > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every tunable is defined once
//! - **Immutable Runs**: `ShellConfig` is validated up front and treated
//!   as read-only for the duration of a pipeline run
//! - **Zero Dependencies**: pure constants and plain data

pub mod constants;

pub use constants::{ConfigError, ShellConfig};

#[cfg(test)]
mod tests;
