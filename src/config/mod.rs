//! Configuration loading and management for the attendance engine.
//!
//! This module provides the session-window and grace-rule configuration
//! consumed by every calculation, with compiled-in defaults matching the
//! deployed business constants and an optional YAML override.
//!
//! # Example
//!
//! ```
//! use attendance_engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.boundaries.night_start, 1320); // 22:00
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, GraceRules, TimeBoundaries};
