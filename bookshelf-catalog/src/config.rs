//! User settings: which library file to use and whose library it is.
//!
//! Priority for each value: command-line flag > env var > config file >
//! default. The config file lives at `<config_dir>/bookshelf/config.toml`.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::store::DEFAULT_LIBRARY_FILE;

pub const LIBRARY_ENV: &str = "BOOKSHELF_LIBRARY";
pub const OWNER_ENV: &str = "BOOKSHELF_OWNER";

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    /// Passed on the command line.
    Flag,
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Built-in default.
    Default,
    /// Not set anywhere.
    Missing,
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// TOML config file format.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub library: LibrarySection,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct LibrarySection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub library_path: PathBuf,
    pub library_source: SettingSource,
    pub owner: Option<String>,
    pub owner_source: SettingSource,
}

impl Settings {
    /// Resolve settings from flags, the process environment, and the config file.
    ///
    /// An unreadable or malformed config file is reported rather than ignored.
    pub fn load(
        library_flag: Option<PathBuf>,
        owner_flag: Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = match config_path() {
            Some(path) => load_config_file(&path)?,
            None => None,
        };
        Ok(Self::resolve(
            library_flag,
            owner_flag,
            std::env::var_os(LIBRARY_ENV).map(PathBuf::from),
            std::env::var(OWNER_ENV).ok(),
            file.unwrap_or_default(),
        ))
    }

    /// Apply the priority rules to already-gathered inputs.
    pub fn resolve(
        library_flag: Option<PathBuf>,
        owner_flag: Option<String>,
        library_env: Option<PathBuf>,
        owner_env: Option<String>,
        file: ConfigFile,
    ) -> Self {
        let (library_path, library_source) = if let Some(p) = library_flag {
            (p, SettingSource::Flag)
        } else if let Some(p) = library_env.filter(|p| !p.as_os_str().is_empty()) {
            (p, SettingSource::EnvVar(LIBRARY_ENV))
        } else if let Some(p) = file.library.path {
            (p, SettingSource::ConfigFile)
        } else {
            (PathBuf::from(DEFAULT_LIBRARY_FILE), SettingSource::Default)
        };

        let (owner, owner_source) = if let Some(n) = non_blank(owner_flag) {
            (Some(n), SettingSource::Flag)
        } else if let Some(n) = non_blank(owner_env) {
            (Some(n), SettingSource::EnvVar(OWNER_ENV))
        } else if let Some(n) = non_blank(file.library.owner) {
            (Some(n), SettingSource::ConfigFile)
        } else {
            (None, SettingSource::Missing)
        };

        Self {
            library_path,
            library_source,
            owner,
            owner_source,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Return the path to the config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("bookshelf").join("config.toml"))
}

/// Read a config file. Returns `Ok(None)` if it does not exist.
pub fn load_config_file(path: &std::path::Path) -> Result<Option<ConfigFile>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(Some(config))
}

/// Merge the given values into the config file at `path`, creating it and its
/// parent directories as needed. `None` leaves the existing value alone.
/// A file that no longer parses is replaced.
pub fn update_config_file(
    path: &std::path::Path,
    library: Option<PathBuf>,
    owner: Option<String>,
) -> Result<ConfigFile, ConfigError> {
    let mut config = match load_config_file(path) {
        Ok(existing) => existing.unwrap_or_default(),
        Err(ConfigError::Parse { path, source }) => {
            log::warn!("Replacing unparsable config {}: {}", path.display(), source);
            ConfigFile::default()
        }
        Err(e) => return Err(e),
    };
    if let Some(p) = library {
        config.library.path = Some(p);
    }
    if let Some(n) = owner {
        config.library.owner = Some(n);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    let toml_str = toml::to_string_pretty(&config)?;
    std::fs::write(path, toml_str).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(config)
}

/// Save settings to the default config file location.
pub fn save_to_file(library: Option<PathBuf>, owner: Option<String>) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    update_config_file(&path, library, owner)?;
    Ok(path)
}
