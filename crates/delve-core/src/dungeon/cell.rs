//! Terrain cells

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Terrain of one cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellState {
    Ground = 0,
    #[default]
    Rock = 1,
}

impl CellState {
    /// Check if this is passable (can walk through)
    pub const fn is_passable(&self) -> bool {
        matches!(self, CellState::Ground)
    }

    /// Check if this cell blocks line of sight
    pub const fn blocks_sight(&self) -> bool {
        matches!(self, CellState::Rock)
    }
}
