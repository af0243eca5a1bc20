//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `DATAGEN_<SECTION>__<KEY>`, e.g.
//!    `DATAGEN_PATHS__OUTPUT=src/data.rs`
//! 3. Config file: `--config FILE`, else `./datagen.toml` if present
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use datagen_core::application::Layout;

/// File read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "datagen.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "DATAGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where scaffold sources live and where the artifact goes.
    pub paths: PathsConfig,
    /// Version-control settings.
    pub vcs: VcsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub source_dir: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VcsConfig {
    /// Executable name or path used for tag and commit lookups.
    pub program: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(Layout::DEFAULT_SOURCE_DIR),
            output: PathBuf::from(Layout::DEFAULT_OUTPUT),
        }
    }
}

impl Default for VcsConfig {
    fn default() -> Self {
        Self {
            program: "git".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and `DATAGEN_*`
    /// environment variables.
    ///
    /// An explicit `config_file` must exist; the implicit `datagen.toml` is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with(config_file.map(PathBuf::as_path), env_source())
    }

    fn load_with(config_file: Option<&Path>, env: Environment) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default()).context("Invalid built-in defaults")?;

        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// The location this configuration resolves to, before CLI overrides.
    pub fn layout(&self, root: &Path) -> Layout {
        Layout::new(root)
            .with_source_dir(&self.paths.source_dir)
            .with_output(&self.paths.output)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
