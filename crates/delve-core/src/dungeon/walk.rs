//! Biased random walk from entry to exit
//!
//! Each step rolls 1-in-`bias_strength`. On a hit the walker moves one cell
//! towards the exit along x or y; otherwise it moves one cell in a random
//! cardinal direction, redrawing until the move stays on the map. The walk
//! ends the first time the walker stands on the exit, so every visited
//! cell is joined to both endpoints.

use hashbrown::HashSet;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::rng::DungeonRng;

use super::coord::{Coord, Direction};

/// Counters collected while walking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkStats {
    /// Total moves made
    pub steps: u64,
    /// Moves that went towards the exit
    pub biased_steps: u64,
    /// Distinct coordinates visited, endpoints included
    pub distinct_cells: usize,
}

/// Result of a completed walk
#[derive(Debug, Clone)]
pub struct Walk {
    pub visited: HashSet<Coord>,
    pub stats: WalkStats,
}

/// Walk from `entry` until `exit` is reached.
///
/// Fails with [`GenerateError::WalkExhausted`] once `step_cap` moves have
/// been made without arriving.
pub fn random_walk(
    entry: Coord,
    exit: Coord,
    width: i32,
    height: i32,
    bias_strength: u32,
    step_cap: u64,
    rng: &mut DungeonRng,
) -> Result<Walk, GenerateError> {
    let mut visited = HashSet::new();
    let mut stats = WalkStats::default();
    let mut current = entry;
    visited.insert(current);

    while current != exit {
        if stats.steps >= step_cap {
            warn!(
                "walk from {entry} to {exit} hit the step cap of {step_cap} \
                 ({} cells visited)",
                visited.len()
            );
            return Err(GenerateError::WalkExhausted {
                steps: stats.steps,
                entry,
                exit,
            });
        }

        current = if rng.one_in(bias_strength) {
            stats.biased_steps += 1;
            biased_step(current, exit, rng)
        } else {
            random_step(current, width, height, rng)
        };
        stats.steps += 1;
        visited.insert(current);
    }

    stats.distinct_cells = visited.len();
    debug!(
        "walk {entry} -> {exit}: {} steps, {} biased, {} cells",
        stats.steps, stats.biased_steps, stats.distinct_cells
    );
    Ok(Walk { visited, stats })
}

/// One cell towards `target`. With both axes unresolved a coin picks the axis.
///
/// No bounds check is made here.
pub fn biased_step(from: Coord, target: Coord, rng: &mut DungeonRng) -> Coord {
    let diff_x = target.x - from.x;
    let diff_y = target.y - from.y;

    if diff_y == 0 || (diff_x != 0 && rng.coin()) {
        from.offset(if diff_x > 0 { 1 } else { -1 }, 0)
    } else {
        from.offset(0, if diff_y > 0 { 1 } else { -1 })
    }
}

/// One cell in a random cardinal direction, redrawn until it lands in
/// `[0, width) x [0, height)`.
pub fn random_step(from: Coord, width: i32, height: i32, rng: &mut DungeonRng) -> Coord {
    loop {
        let Some(&dir) = rng.choose(&Direction::ALL) else {
            return from;
        };
        let to = from.step(dir);
        if to.x >= 0 && to.x < width && to.y >= 0 && to.y < height {
            return to;
        }
    }
}
