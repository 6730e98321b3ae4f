use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::types::Color;

/// Background color removed when no other target is configured.
pub const DEFAULT_TARGET: Color = Color::WHITE;

/// Largest L1 distance from the target that still counts as background (inclusive).
pub const DEFAULT_TOLERANCE: u32 = 30;

/// Largest accepted input, in bytes (30 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 30 * 1024 * 1024;

/// Background classification parameters for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemovalParams {
    pub target: Color,
    /// Inclusive L1 threshold
    pub tolerance: u32,
}

impl Default for RemovalParams {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Pipeline settings suitable for config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub max_input_bytes: u64,
    pub removal: RemovalParams,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            removal: RemovalParams::default(),
        }
    }
}

impl PipelineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        debug!("Loading pipeline config from {:?}", path);
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
