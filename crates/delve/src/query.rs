//! Line-of-sight queries given on the command line

use std::str::FromStr;

use anyhow::{Context, bail};
use delve_core::dungeon::distance;
use delve_core::{Coord, Dungeon};
use serde::Serialize;

/// A `x1,y1,x2,y2` segment to test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LosQuery {
    pub from: Coord,
    pub to: Coord,
}

impl FromStr for LosQuery {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|p| {
                p.trim()
                    .parse::<i32>()
                    .with_context(|| format!("bad coordinate '{p}' in '{s}'"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        let [x1, y1, x2, y2] = parts[..] else {
            bail!("expected x1,y1,x2,y2 but got '{s}'");
        };
        Ok(Self {
            from: Coord::new(x1, y1),
            to: Coord::new(x2, y2),
        })
    }
}

/// Answer to one query
#[derive(Debug, Clone, Serialize)]
pub struct LosAnswer {
    pub from: Coord,
    pub to: Coord,
    pub clear: bool,
    pub distance: i32,
}

impl LosQuery {
    pub fn answer(&self, dungeon: &Dungeon) -> LosAnswer {
        LosAnswer {
            from: self.from,
            to: self.to,
            clear: dungeon.is_clear_path(self.from, self.to),
            distance: distance(self.from, self.to),
        }
    }
}
