//! Errors raised while building a dungeon
//!
//! Only construction can fail. Every query on a finished dungeon is total
//! and answers out-of-range input with Rock / false instead of an error.

use thiserror::Error;

use crate::dungeon::Coord;

/// Invalid generation parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{axis} must be at least {min}, got {value}")]
    DimensionTooSmall {
        axis: &'static str,
        value: i32,
        min: i32,
    },

    #[error("bias strength must be at least 1")]
    ZeroBiasStrength,

    #[error("step cap must be at least 1")]
    ZeroStepCap,

    #[error("could not parse config: {0}")]
    Parse(String),
}

/// Failure while generating a dungeon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("walk from {entry} gave up after {steps} steps without reaching {exit}")]
    WalkExhausted {
        steps: u64,
        entry: Coord,
        exit: Coord,
    },
}
