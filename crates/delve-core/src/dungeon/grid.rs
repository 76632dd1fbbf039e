//! The generated dungeon

use hashbrown::HashSet;
use log::debug;

use crate::config::DungeonConfig;
use crate::error::GenerateError;
use crate::rng::DungeonRng;

use super::cell::CellState;
use super::coord::{Coord, Direction, distance};
use super::los;
use super::walk::{WalkStats, random_walk};

/// A rock grid with a single walked passage from `entry` to `exit`.
///
/// Fully built by [`Dungeon::generate`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dungeon {
    width: i32,
    height: i32,
    entry: Coord,
    exit: Coord,
    /// Column-major: `cells[x][y]`
    cells: Vec<Vec<CellState>>,
    stats: WalkStats,
}

impl Dungeon {
    /// Generate a dungeon of the given size with the default bias and step cap
    pub fn new(width: i32, height: i32, rng: &mut DungeonRng) -> Result<Self, GenerateError> {
        Self::generate(&DungeonConfig::new(width, height), rng)
    }

    /// Generate a dungeon from `config`, drawing all randomness from `rng`.
    ///
    /// The entry lands in the first quarter of each axis and the exit in
    /// the last quarter.
    pub fn generate(config: &DungeonConfig, rng: &mut DungeonRng) -> Result<Self, GenerateError> {
        config.validate()?;
        let (width, height) = (config.width, config.height);
        let (quarter_w, quarter_h) = ((width / 4) as u32, (height / 4) as u32);

        let entry = Coord::new(rng.rn2(quarter_w) as i32, rng.rn2(quarter_h) as i32);
        let exit = Coord::new(
            width - 1 - rng.rn2(quarter_w) as i32,
            height - 1 - rng.rn2(quarter_h) as i32,
        );

        let walk = random_walk(
            entry,
            exit,
            width,
            height,
            config.bias_strength,
            config.step_cap(),
            rng,
        )?;
        let dungeon = Self::from_ground(width, height, entry, exit, walk.visited, walk.stats);

        debug!(
            "generated {}x{} dungeon (seed {}): entry {}, exit {}, {} ground cells",
            width,
            height,
            rng.seed(),
            entry,
            exit,
            dungeon.ground_count()
        );
        Ok(dungeon)
    }

    /// Carve `ground` out of solid rock. Out-of-bounds coordinates are skipped.
    pub(crate) fn from_ground(
        width: i32,
        height: i32,
        entry: Coord,
        exit: Coord,
        ground: impl IntoIterator<Item = Coord>,
        stats: WalkStats,
    ) -> Self {
        let columns = width.max(0) as usize;
        let rows = height.max(0) as usize;
        let mut dungeon = Self {
            width,
            height,
            entry,
            exit,
            cells: vec![vec![CellState::Rock; rows]; columns],
            stats,
        };
        for c in ground {
            if dungeon.in_bounds(c) {
                dungeon.cells[c.x as usize][c.y as usize] = CellState::Ground;
            }
        }
        dungeon
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn entry(&self) -> Coord {
        self.entry
    }

    pub fn exit(&self) -> Coord {
        self.exit
    }

    /// Counters from the walk that carved this dungeon
    pub fn walk_stats(&self) -> WalkStats {
        self.stats
    }

    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    /// Terrain at (x, y). Anything off the map is Rock.
    pub fn cell_at(&self, x: i32, y: i32) -> CellState {
        self.cell(Coord::new(x, y))
    }

    pub fn cell(&self, c: Coord) -> CellState {
        if self.in_bounds(c) {
            self.cells[c.x as usize][c.y as usize]
        } else {
            CellState::Rock
        }
    }

    pub fn is_passable(&self, c: Coord) -> bool {
        self.cell(c).is_passable()
    }

    /// See [`los::is_clear_path`]
    pub fn is_clear_path(&self, start: Coord, end: Coord) -> bool {
        los::is_clear_path(self, start, end)
    }

    /// Straight-line distance, rounded down
    pub fn distance(from: Coord, to: Coord) -> i32 {
        distance(from, to)
    }

    /// All Ground coordinates, column by column
    pub fn ground_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_passable())
                .map(move |(y, _)| Coord::new(x as i32, y as i32))
        })
    }

    pub fn ground_count(&self) -> usize {
        self.cells
            .iter()
            .map(|column| column.iter().filter(|cell| cell.is_passable()).count())
            .sum()
    }

    /// Ground cells one step north, east, south or west of `c`
    pub fn passable_neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |dir| c.step(dir))
            .filter(move |n| self.is_passable(*n))
    }

    /// Every Ground cell 4-connected to `start`; empty if `start` is Rock
    pub fn reachable_from(&self, start: Coord) -> HashSet<Coord> {
        let mut seen = HashSet::new();
        if !self.is_passable(start) {
            return seen;
        }

        let mut stack = vec![start];
        seen.insert(start);
        while let Some(current) = stack.pop() {
            for next in self.passable_neighbors(current) {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        seen
    }

    /// Check if a Ground path joins `a` and `b`
    pub fn is_connected(&self, a: Coord, b: Coord) -> bool {
        self.is_passable(b) && self.reachable_from(a).contains(&b)
    }
}
