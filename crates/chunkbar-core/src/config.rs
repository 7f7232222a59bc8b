/// Demo configuration — optional JSON file controlling the simulated
/// transfer. Missing file means defaults; a present-but-broken file is a
/// hard error so typos don't silently fall back.
use crate::download::DownloadPlan;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings for the demo download. Unknown fields are rejected; absent
/// fields take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Number of chunks the transfer is split into.
    pub chunk_count: usize,
    /// Size of each chunk in KiB.
    pub chunk_size_kb: u64,
    /// Interval between transfer ticks in milliseconds.
    pub tick_ms: u64,
    /// Baseline KiB transferred per chunk per tick.
    pub rate_kb_per_tick: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            chunk_count: 4,
            chunk_size_kb: 2048,
            tick_ms: 50,
            rate_kb_per_tick: 32,
        }
    }
}

impl DemoConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        let config: Self = serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        info!(?config, "loaded config from {}", path.display());
        Ok(config)
    }

    /// Build the download plan this configuration describes.
    ///
    /// Degenerate settings are sanitised rather than rejected: at least one
    /// chunk, at least one byte per tick.
    pub fn plan(&self) -> DownloadPlan {
        DownloadPlan {
            chunk_count: self.chunk_count.max(1),
            chunk_size: self.chunk_size_kb * 1024,
            tick: Duration::from_millis(self.tick_ms.max(1)),
            base_rate: (self.rate_kb_per_tick * 1024).max(1),
        }
    }
}
