// src/config.rs

//! Defines the configuration consumed by a render pass.
//!
//! A `Config` is an explicit value handed to the `Renderer`; nothing in the
//! rendering core reads process state. Values normally come from environment
//! variables (see the `ENV_*` constants) and every recognized option has a
//! documented default. A variable that is present but does not parse as the
//! expected integer is treated as absent.
//!
//! The struct also derives serde's traits so a configuration can be exported
//! (`termbrot --print-config`) or built from a partial JSON document.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::viewport::Grid;

/// Grid width (columns).
pub const ENV_WIDTH: &str = "MANDEL_W";
/// Grid height (rows).
pub const ENV_HEIGHT: &str = "MANDEL_H";
/// Iteration budget.
pub const ENV_MAX_ITER: &str = "MANDEL_ITERS";
/// Optional note printed after the frame.
pub const ENV_NOTE: &str = "PLUG_MSG";

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 24;
pub const DEFAULT_MAX_ITER: i64 = 80;

/// Settings for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // Missing fields fall back to `Config::default()`.
pub struct Config {
    /// Number of characters per output row.
    pub width: usize,
    /// Number of output rows.
    pub height: usize,
    /// Raw iteration budget. Use `iteration_budget()` for the effective value.
    pub max_iter: i64,
    /// Informational line appended after the frame when non-empty.
    pub note: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iter: DEFAULT_MAX_ITER,
            note: None,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Nothing is cached: each call sees the environment as it is now.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key-value source.
    ///
    /// `lookup` returns the raw value for a key, or `None` when the key is
    /// unset. Invalid integers silently fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            width: parse_or_default(ENV_WIDTH, lookup(ENV_WIDTH), DEFAULT_WIDTH),
            height: parse_or_default(ENV_HEIGHT, lookup(ENV_HEIGHT), DEFAULT_HEIGHT),
            max_iter: parse_or_default(ENV_MAX_ITER, lookup(ENV_MAX_ITER), DEFAULT_MAX_ITER),
            note: lookup(ENV_NOTE).filter(|note| !note.is_empty()),
        };
        debug!("Config loaded: {:?}", config);
        config
    }

    /// Parses a (possibly partial) JSON configuration document.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config = serde_json::from_str(text)?;
        Ok(config)
    }

    /// The output raster described by this configuration.
    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height)
    }

    /// The effective iteration budget.
    ///
    /// Non-positive budgets are raised to 1 so quantization never divides by
    /// zero. Budgets beyond `u32::MAX` saturate.
    pub fn iteration_budget(&self) -> u32 {
        u32::try_from(self.max_iter.max(1)).unwrap_or(u32::MAX)
    }

    /// The note to print after the frame, if any.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().filter(|note| !note.is_empty())
    }
}

fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!(
                "Config: {}={:?} is not a valid integer, using default {}",
                key, raw, default
            );
            default
        }
    }
}
