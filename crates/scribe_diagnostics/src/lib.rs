//! Offenses, severities, and the offense accumulator.
//!
//! This crate provides the [`Offense`] value every rule produces, the
//! [`RuleId`] and [`Severity`] it carries, and the [`OffenseSink`] the engine
//! records offenses into during a run. Formatting offenses for humans is left
//! to the host.

#![warn(missing_docs)]

pub mod offense;
pub mod rule_id;
pub mod severity;
pub mod sink;

pub use offense::Offense;
pub use rule_id::RuleId;
pub use severity::Severity;
pub use sink::OffenseSink;
