use thiserror::Error;

/// Startup failures.  The simulation itself never errors once running.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("unknown {category} variant: {name}")]
    UnknownVariant { category: &'static str, name: String },

    #[error("no {category} variants registered")]
    EmptyRegistry { category: &'static str },
}
