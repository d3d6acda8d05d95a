//! Optional JSON configuration.
//!
//! ```json
//! {
//!   "seed": 42,
//!   "candidates": ["claude", "codex", "my-agent --fast"],
//!   "timing": { "wheel": { "base_delay_ms": 40.0, "spread_ms": 200.0 } }
//! }
//! ```
//!
//! Every field is optional; missing ones fall back to [`Config::default`].

use crate::discovery::known_tools;
use crate::error::{PickerError, Result};
use crate::timing::TimingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed seed for reproducible spins.
    pub seed: Option<u64>,

    /// Deceleration curves.
    pub timing: TimingConfig,

    /// Tools probed on `PATH` when no participants are given.
    pub candidates: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            timing: TimingConfig::default(),
            candidates: known_tools(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PickerError::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
