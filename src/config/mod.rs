use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::debug;

use crate::engine::EngineKind;
use crate::request::Limits;
use crate::tester::{DEFAULT_BACKTRACK_LIMIT, DEFAULT_ITERATIONS, DEFAULT_TIMEOUT};

pub const CONFIG_FILE_NAME: &str = ".regexcraft.yml";

/// Settings from `.regexcraft.yml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timeout_ms: u64,
    pub backtrack_limit: usize,
    pub engine: EngineKind,
    pub iterations: i64,
    pub limits: Limits,
    #[serde(skip)]
    source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
            engine: EngineKind::default(),
            iterations: DEFAULT_ITERATIONS,
            limits: Limits::default(),
            source: None,
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// File the settings were read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Load config from the given path, or look for `.regexcraft.yml` in `dir`
/// (the current directory when `None`).
///
/// A missing default file yields defaults; a missing explicit file is an error.
pub fn load_config(path: Option<&Path>, dir: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                bail!("config file {} does not exist", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let candidate = dir.unwrap_or(Path::new(".")).join(CONFIG_FILE_NAME);
            if !candidate.exists() {
                debug!("no {CONFIG_FILE_NAME} found, using defaults");
                return Ok(Config::default());
            }
            candidate
        }
    };

    let contents = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config {}", config_path.display()))?;

    let mut config = if contents.trim().is_empty() {
        Config::default()
    } else {
        serde_yml::from_str::<Config>(&contents)
            .with_context(|| format!("failed to parse {}", config_path.display()))?
    };

    if config.timeout_ms == 0 {
        bail!("{}: timeout_ms must be positive", config_path.display());
    }

    debug!(path = %config_path.display(), "config loaded");
    config.source = Some(config_path);
    Ok(config)
}
