//! Dungeon system
//!
//! Contains coordinates, cells, the walked grid and line-of-sight queries.

mod cell;
mod coord;
mod grid;
mod los;
mod walk;

pub use cell::CellState;
pub use coord::{Coord, Direction, distance};
pub use grid::Dungeon;
pub use los::is_clear_path;
pub use walk::{Walk, WalkStats, biased_step, random_step, random_walk};
