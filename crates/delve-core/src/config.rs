//! Generation parameters
//!
//! Loaded from flags or a JSON file by the command-line front end.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rng::DungeonRng;
use crate::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_DIMENSION, STEP_CAP_FACTOR, STRENGTH};

/// Parameters for one dungeon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub width: i32,
    pub height: i32,
    /// A biased step is taken on a 1-in-`bias_strength` roll
    pub bias_strength: u32,
    /// Hard ceiling on walk length; `None` derives one from the area
    pub max_steps: Option<u64>,
    /// Fixed seed for reproducible layouts; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            bias_strength: STRENGTH,
            max_steps: None,
            seed: None,
        }
    }
}

impl DungeonConfig {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_bias_strength(mut self, bias_strength: u32) -> Self {
        self.bias_strength = bias_strength;
        self
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reject sizes that leave the entry or exit range empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if value < MIN_DIMENSION {
                return Err(ConfigError::DimensionTooSmall {
                    axis,
                    value,
                    min: MIN_DIMENSION,
                });
            }
        }
        if self.bias_strength == 0 {
            return Err(ConfigError::ZeroBiasStrength);
        }
        if self.max_steps == Some(0) {
            return Err(ConfigError::ZeroStepCap);
        }
        Ok(())
    }

    /// Maximum number of walk steps before generation fails
    pub fn step_cap(&self) -> u64 {
        self.max_steps.unwrap_or_else(|| {
            let area = self.width.max(0) as u64 * self.height.max(0) as u64;
            area.saturating_mul(STEP_CAP_FACTOR)
        })
    }

    /// RNG seeded from `seed`, or from entropy when unset
    pub fn rng(&self) -> DungeonRng {
        match self.seed {
            Some(seed) => DungeonRng::new(seed),
            None => DungeonRng::default(),
        }
    }
}
