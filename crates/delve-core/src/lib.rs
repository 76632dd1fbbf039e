//! delve-core: random-walk dungeon generation
//!
//! Builds a rock grid with one passage carved by a biased random walk
//! between an entry and an exit, and answers terrain, connectivity and
//! line-of-sight queries on the result. All randomness comes from an
//! explicit [`DungeonRng`], so a seed reproduces a layout exactly.

pub mod config;
pub mod dungeon;
pub mod error;

mod consts;
mod rng;

pub use config::DungeonConfig;
pub use consts::*;
pub use dungeon::{CellState, Coord, Dungeon};
pub use error::{ConfigError, GenerateError};
pub use rng::DungeonRng;
