//! ConfigStore - Configuration and Data Directories
//!
//! The configuration file is read once at start-up and never written back.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::constants::CONFIG_FILE_NAME;
use crate::domain::config::AppConfig;
use crate::error::{Error, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("org", "policysim", "policy-sim").ok_or(Error::ConfigDir)
}

/// Path of the configuration file
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/policy-sim/policy-sim.toml`
/// - **macOS**: `~/Library/Application Support/org.policysim.policy-sim/policy-sim.toml`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\policysim\policy-sim\config\policy-sim.toml`
pub fn config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}

/// Get or create the data directory used for log files
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let data_dir = dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}

/// Read a configuration file; `Ok(None)` when it does not exist
pub fn read_config(path: &Path) -> Result<Option<AppConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    AppConfig::from_toml_str(&content).map(Some)
}

/// Where the running configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file
    File(PathBuf),
    /// No file present
    Defaults,
    /// A file or directory problem; defaults are in use
    Unreadable { path: Option<PathBuf>, error: String },
}

impl ConfigSource {
    pub fn is_file(&self) -> bool {
        matches!(self, ConfigSource::File(_))
    }

    /// Report the source once logging is up
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => tracing::info!(path = ?path, "Configuration loaded"),
            ConfigSource::Defaults => tracing::debug!("No configuration file, using defaults"),
            ConfigSource::Unreadable { path, error } => {
                tracing::error!(error = %error, path = ?path, "Failed to read config, using defaults")
            }
        }
    }
}

/// Load the application configuration, falling back to defaults
pub fn load_app_config() -> (AppConfig, ConfigSource) {
    let path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            let source = ConfigSource::Unreadable {
                path: None,
                error: e.to_string(),
            };
            return (AppConfig::default(), source);
        }
    };

    match read_config(&path) {
        Ok(Some(config)) => (config, ConfigSource::File(path)),
        Ok(None) => (AppConfig::default(), ConfigSource::Defaults),
        Err(e) => {
            let source = ConfigSource::Unreadable {
                path: Some(path),
                error: e.to_string(),
            };
            (AppConfig::default(), source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policy::PolicyLevel;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("policy-sim-{}-{name}", std::process::id()))
    }

    #[test]
    fn missing_file_is_none() {
        let path = scratch_file("missing.toml");
        let _ = fs::remove_file(&path);
        assert!(matches!(read_config(&path), Ok(None)));
    }

    #[test]
    fn reads_existing_file() {
        let path = scratch_file("valid.toml");
        fs::write(&path, "[simulator.initial]\neducation = \"weak\"\n").expect("write scratch");

        let config = read_config(&path).expect("readable").expect("present");
        assert_eq!(config.simulator.initial.education, PolicyLevel::Weak);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = scratch_file("broken.toml");
        fs::write(&path, "[ui\nlocale = ").expect("write scratch");

        assert!(matches!(read_config(&path), Err(Error::TomlDe { .. })));

        let _ = fs::remove_file(&path);
    }
}
