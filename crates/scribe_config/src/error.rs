//! Error types for rule configuration validation.

/// Errors raised while reading rule configuration.
///
/// All of these are setup-time errors: they abort engine construction before
/// any file is analyzed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An option has the wrong shape, e.g. a string where a boolean is required.
    #[error("{rule}: option '{option}' must be {expected}, found {found}")]
    TypeMismatch {
        /// The rule or section the option belongs to.
        rule: String,
        /// The option name.
        option: String,
        /// A description of the accepted shape.
        expected: &'static str,
        /// The TOML type that was found.
        found: &'static str,
    },

    /// An option has the right shape but a value the rule cannot use.
    #[error("{rule}: invalid value for option '{option}': {message}")]
    InvalidValue {
        /// The rule or section the option belongs to.
        rule: String,
        /// The option name.
        option: String,
        /// What is wrong with the value.
        message: String,
    },

    /// A top-level section is not a table of options.
    #[error("configuration section '{section}' must be a table, found {found}")]
    NotATable {
        /// The section name.
        section: String,
        /// The TOML type that was found.
        found: &'static str,
    },
}
