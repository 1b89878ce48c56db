//! Run settings
//!
//! Command-line flags win over the JSON config file, which wins over the
//! defaults. The display bound falls back to the terminal size.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tp_core::maze::{Dimensions, WallStyle};

use crate::Args;

/// Terminal size used when the real one cannot be read
pub const FALLBACK_TERMINAL: (u16, u16) = (80, 24);

/// Contents of a JSON config file; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub level: Option<u32>,
    pub intensity: Option<i32>,
    pub seed: Option<u64>,
    pub bound: Option<Dimensions>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}

/// Fully resolved settings for one maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub level: u32,
    pub intensity: i32,
    pub seed: Option<u64>,
    pub bound: Dimensions,
}

impl Settings {
    /// Merge flags, config file and the terminal size (columns, rows)
    pub fn resolve(args: &Args, config: &Config, terminal: (u16, u16)) -> Self {
        let display = Dimensions::fit_display(terminal.0, terminal.1);
        let base = config.bound.unwrap_or(display);

        Self {
            level: args.level.or(config.level).unwrap_or(0),
            intensity: args
                .intensity
                .or(config.intensity)
                .unwrap_or(WallStyle::default().intensity()),
            seed: args.seed.or(config.seed),
            bound: Dimensions::new(
                args.length.unwrap_or(base.length),
                args.width.unwrap_or(base.width),
            ),
        }
    }
}
