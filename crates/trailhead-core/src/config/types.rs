//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::graph::Strategy;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Node where the bundled maze is entered
pub const DEFAULT_FROM: u32 = 0;

/// Node where the bundled maze is left
pub const DEFAULT_TO: u32 = 17;

/// Top-level trailhead configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailheadConfig {
    /// Configuration format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,
}

/// Defaults applied to `paths` when flags are omitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Strategies to run, in order
    #[serde(default = "default_strategies")]
    pub strategies: Vec<Strategy>,

    /// Start node
    #[serde(default = "default_from")]
    pub from: u32,

    /// End node
    #[serde(default = "default_to")]
    pub to: u32,
}

impl Default for TrailheadConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            format: OutputFormat::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategies: default_strategies(),
            from: default_from(),
            to: default_to(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_strategies() -> Vec<Strategy> {
    Strategy::ALL.to_vec()
}

fn default_from() -> u32 {
    DEFAULT_FROM
}

fn default_to() -> u32 {
    DEFAULT_TO
}
