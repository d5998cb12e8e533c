//! Engine configuration.

use crate::eval::{DiagonalRule, LineWeights};
use crate::types::CELL_COUNT;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default search depth: one computer move, one reply, one more computer
/// move, then the heuristic.
pub const DEFAULT_DEPTH: u32 = 3;

/// Largest magnitude accepted for any heuristic weight.
pub const MAX_WEIGHT: i32 = 1_000_000;

/// Configuration for the search engine.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// depth = 4
/// diagonal_rule = "legacy_sum"
///
/// [weights]
/// center = 0
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched from the root, counting the computer's candidate move.
    depth: u32,

    /// Take a move that wins on the spot without searching.
    immediate_win: bool,

    /// Take a move that blocks an immediate opponent win without searching.
    immediate_block: bool,

    /// How diagonals are scored by the heuristic.
    diagonal_rule: DiagonalRule,

    /// Heuristic weights.
    weights: LineWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            immediate_win: true,
            immediate_block: true,
            diagonal_rule: DiagonalRule::default(),
            weights: LineWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;

        info!(depth = config.depth, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the search depth and weights are usable.
    ///
    /// Depth must be at least 1 (the root move itself) and no more than the
    /// number of squares. Every weight must lie within [`MAX_WEIGHT`] of
    /// zero, and `win` must be positive.
    #[instrument(skip(self), fields(depth = self.depth))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth as usize > CELL_COUNT {
            return Err(ConfigError::new(format!(
                "depth must be between 1 and {}, got {}",
                CELL_COUNT, self.depth
            )));
        }

        let weights = &self.weights;
        for (name, value) in [
            ("win", weights.win),
            ("opponent_pair", weights.opponent_pair),
            ("own_pair", weights.own_pair),
            ("opponent_single", weights.opponent_single),
            ("own_single", weights.own_single),
            ("center", weights.center),
        ] {
            if value.unsigned_abs() > MAX_WEIGHT.unsigned_abs() {
                return Err(ConfigError::new(format!(
                    "weights.{} must be between -{} and {}, got {}",
                    name, MAX_WEIGHT, MAX_WEIGHT, value
                )));
            }
        }

        if weights.win <= 0 {
            return Err(ConfigError::new(format!(
                "weights.win must be positive, got {}",
                weights.win
            )));
        }

        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
