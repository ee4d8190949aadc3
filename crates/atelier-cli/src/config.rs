use anyhow::{Context, Result};
use atelier_core::CaseRules;
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for atelier.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (ATELIER_* prefix)
/// 3. Config file (~/.config/atelier/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the artist file.
    ///
    /// Can be set via:
    /// - CLI: --data /path/to/artists.csv
    /// - ENV: ATELIER_DATA_PATH
    /// - Config: data_path = "/path/to/artists.csv"
    /// - Default: artists.csv in the working directory
    pub data_path: PathBuf,

    /// Default log filter when RUST_LOG is not set.
    pub log_level: String,

    /// Which fields are matched case-sensitively.
    pub case_sensitive: CaseRules,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            log_level: String::from("warn"),
            case_sensitive: CaseRules::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/atelier/config.toml
    /// Reads environment variables with ATELIER_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path(), "atelier")
    }

    /// Load from an explicit config file and environment prefix.
    fn load_from(config_path: &Path, env_prefix: &str) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level(env_prefix);
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Replace the data path, as the --data CLI flag does.
    #[must_use]
    pub fn with_data_path(mut self, data_path: PathBuf) -> Self {
        self.data_path = data_path;
        self
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("artists.csv")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/atelier/config.toml
/// - macOS: ~/Library/Application Support/atelier/config.toml
/// - Windows: %APPDATA%\atelier\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("atelier")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Atelier Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (ATELIER_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Path to the artist file
#
# A header line followed by one row per artist:
#   id,name,years,genre,nationality,biography,reference,total_paintings
#
# Can also be set via:
# - CLI: atelier --data /custom/artists.csv menu
# - Environment: ATELIER_DATA_PATH=/custom/artists.csv
#
# Default: artists.csv in the working directory
data_path = "artists.csv"

# Log filter used when RUST_LOG is not set (error, warn, info, debug, trace)
log_level = "warn"

# Case sensitivity per matched field (true = exact case)
#
# name is used by the artist info, biography, reference and painting lookups.
# Individual queries can override this with --case-sensitive or --ignore-case.
[case_sensitive]
name = false
genre = false
nationality = true
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
