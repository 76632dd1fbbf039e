//! Generation constants

/// Odds against a biased step: the walker heads for the exit on a
/// 1-in-`STRENGTH` roll and wanders otherwise.
pub const STRENGTH: u32 = 10;

/// Smallest width or height for which `dim / 4` leaves a non-empty
/// placement range for the entry and exit.
pub const MIN_DIMENSION: i32 = 4;

/// Default dungeon size
pub const DEFAULT_WIDTH: i32 = 40;
pub const DEFAULT_HEIGHT: i32 = 20;

/// Steps allowed per cell before a walk is abandoned, when no explicit
/// step cap is configured.
pub const STEP_CAP_FACTOR: u64 = 1000;
