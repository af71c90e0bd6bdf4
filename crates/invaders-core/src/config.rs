//! Runtime configuration, read once at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{ALIEN_COLUMNS, ALIEN_ROWS, BULLET_CAPACITY};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Options that shape a level. Missing JSON fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Outline every active collider after the sprites.
    pub debug_colliders: bool,
    pub alien_rows: usize,
    pub alien_columns: usize,
    /// Pre-allocated bullet slots.
    pub bullet_capacity: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            debug_colliders: false,
            alien_rows: ALIEN_ROWS,
            alien_columns: ALIEN_COLUMNS,
            bullet_capacity: BULLET_CAPACITY,
        }
    }
}

impl CoreConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Number of alien entities a level built from this config holds,
    /// `None` if the grid size overflows.
    pub fn alien_count(&self) -> Option<usize> {
        self.alien_rows.checked_mul(self.alien_columns)
    }
}
