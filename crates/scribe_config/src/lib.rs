//! Typed access to per-rule configuration options.
//!
//! The host loads and merges its configuration files; this crate receives the
//! result as a [`toml::Table`] keyed by rule id (or section name) and exposes
//! each section as a [`RuleConfig`] whose accessors validate option shapes.
//! Shape errors surface as [`ConfigError`] when rules are registered, never
//! during a run.

#![warn(missing_docs)]

pub mod error;
pub mod types;

pub use error::ConfigError;
pub use types::{AnalysisConfig, RuleConfig, ENABLED, SEVERITY};
