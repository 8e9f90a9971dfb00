use aboutlib_libraries::HostContext;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_LIBRARY: &str = "kotlin";

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Configuration could not be located, parsed or written
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ABOUTLIB_PATH environment variable (with tilde expansion)
/// 3. System data directory
/// 4. ~/.aboutlib
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("ABOUTLIB_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("aboutlib"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".aboutlib"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_library() -> String {
    DEFAULT_LIBRARY.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Library shown when no `--library` is given
    #[serde(default = "default_library")]
    pub library: String,

    /// Host application context handed to libraries that need one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<HostContext>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library: default_library(),
            host: None,
        }
    }
}

impl Config {
    /// Location of `config.toml` inside a data directory.
    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), library = %config.library, "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }

    pub fn set_library(&mut self, name: impl Into<String>) {
        self.library = name.into();
    }

    pub fn set_package_name(&mut self, package_name: impl Into<String>) {
        self.host = Some(HostContext::new(package_name));
    }

    pub fn package_name(&self) -> Option<&str> {
        self.host.as_ref().map(|h| h.package_name.as_str())
    }
}
