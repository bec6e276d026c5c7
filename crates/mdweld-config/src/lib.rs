//! Configuration management for mdweld.
//!
//! Parses `mdweld.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Relative paths in
//! the file are resolved against the config file's directory, so the
//! resolved [`Config`] always carries usable paths regardless of where the
//! tool was invoked from.
//!
//! ```toml
//! [docs]
//! source_dir = "docs"
//! out_dir = "build"
//!
//! [includes]
//! root_alias = "@/"
//! root_dir = "."
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdweld.toml";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Cannot read config file {path}: {source}")]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML.
    #[error("Cannot parse config file {path}: {source}")]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },
}

/// Raw docs section as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsRaw {
    source_dir: Option<String>,
    out_dir: Option<String>,
}

/// Raw includes section as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct IncludesRaw {
    root_alias: Option<String>,
    root_dir: Option<String>,
}

/// Raw configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigRaw {
    docs: DocsRaw,
    includes: IncludesRaw,
}

/// Resolved application configuration.
#[derive(Debug)]
pub struct Config {
    /// Directory containing the markdown sources.
    pub source_dir: PathBuf,
    /// Directory the preprocessed tree is written to.
    pub out_dir: PathBuf,
    /// Alias prefix for project-root includes.
    pub root_alias: String,
    /// Project root the alias prefix resolves against.
    pub root_dir: PathBuf,
    /// Path of the loaded config file (set after loading).
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a specific file.
    ///
    /// Relative paths resolve against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let raw: ConfigRaw = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;

        let base = path.parent().unwrap_or(Path::new(".")).to_owned();
        Ok(Self::from_raw(raw, &base, Some(path.to_owned())))
    }

    /// Discover and load `mdweld.toml` in `start_dir` or any parent.
    ///
    /// Falls back to defaults rooted at `start_dir` when no file is found.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a discovered file cannot be read or
    /// parsed.
    pub fn discover(start_dir: &Path) -> Result<Self, ConfigError> {
        for dir in start_dir.ancestors() {
            let candidate = dir.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Self::load(&candidate);
            }
        }
        Ok(Self::default_with_base(start_dir))
    }

    /// Default configuration with all paths rooted at `base`.
    #[must_use]
    pub fn default_with_base(base: &Path) -> Self {
        Self::from_raw(ConfigRaw::default(), base, None)
    }

    fn from_raw(raw: ConfigRaw, base: &Path, config_path: Option<PathBuf>) -> Self {
        let resolve = |value: Option<String>, default: &str| {
            let rel = value.unwrap_or_else(|| default.to_owned());
            base.join(rel)
        };

        Self {
            source_dir: resolve(raw.docs.source_dir, "docs"),
            out_dir: resolve(raw.docs.out_dir, "build"),
            root_alias: raw.includes.root_alias.unwrap_or_else(|| "@/".to_owned()),
            root_dir: raw
                .includes
                .root_dir
                .map_or_else(|| base.to_owned(), |rel| base.join(rel)),
            config_path,
        }
    }
}
