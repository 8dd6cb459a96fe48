//! Configuration file parsing and discovery.
//!
//! This module handles loading defaults from TOML files. Config files are
//! optional; only the CLI consumes them, and CLI flags always win over file
//! values. No environment variables are consumed.

use crate::error::OsintCheckError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration loaded from TOML files.
///
/// ```toml
/// [defaults]
/// region = "GB"
/// timeout = 5.0
/// delay = 1.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Default values for CLI options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

/// Default configuration values that map to CLI options.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Default region hint for phone lookups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Default per-request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<f64>,

    /// Default inter-request delay in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
}

/// Configuration discovery and loading functionality.
pub struct ConfigManager {
    /// Whether to emit warnings for config issues
    pub verbose: bool,
}

impl ConfigManager {
    /// Create a new configuration manager.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or not valid TOML.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<FileConfig, OsintCheckError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(OsintCheckError::file_error(
                path.to_string_lossy(),
                "Configuration file not found",
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            OsintCheckError::file_error(
                path.to_string_lossy(),
                format!("Failed to read configuration file: {}", e),
            )
        })?;

        let config: FileConfig = toml::from_str(&content).map_err(|e| {
            OsintCheckError::config(format!("Failed to parse TOML configuration: {}", e))
        })?;

        self.validate_config(&config)?;

        Ok(config)
    }

    /// Discover and load configuration files in precedence order.
    ///
    /// Lowest to highest: XDG config, home directory, current directory.
    /// Later files override earlier ones field by field.
    pub fn discover_and_load(&self) -> Result<FileConfig, OsintCheckError> {
        let mut merged = FileConfig::default();
        let mut loaded_files = Vec::new();

        if let Some(xdg_path) = self.get_xdg_config_path() {
            if let Ok(config) = self.load_file(&xdg_path) {
                merged = merge_configs(merged, config);
                loaded_files.push(xdg_path);
            }
        }

        if let Some(global_path) = self.get_global_config_path() {
            if let Ok(config) = self.load_file(&global_path) {
                merged = merge_configs(merged, config);
                loaded_files.push(global_path);
            }
        }

        if let Some(local_path) = self.get_local_config_path() {
            if let Ok(config) = self.load_file(&local_path) {
                merged = merge_configs(merged, config);
                loaded_files.push(local_path);
            }
        }

        if self.verbose && loaded_files.len() > 1 {
            eprintln!("Multiple config files found. Using precedence:");
            for (i, path) in loaded_files.iter().enumerate() {
                let status = if i == loaded_files.len() - 1 {
                    "active"
                } else {
                    "overridden"
                };
                eprintln!("   {} ({})", path.display(), status);
            }
        }

        Ok(merged)
    }

    /// Validate a loaded configuration.
    fn validate_config(&self, config: &FileConfig) -> Result<(), OsintCheckError> {
        if let Some(defaults) = &config.defaults {
            if let Some(region) = &defaults.region {
                if region.len() != 2 || !region.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(OsintCheckError::config(format!(
                        "Invalid region '{}': expected a two-letter code",
                        region
                    )));
                }
            }
            if let Some(timeout) = defaults.timeout {
                if !timeout.is_finite() || timeout <= 0.0 {
                    return Err(OsintCheckError::config(
                        "Invalid timeout: must be a positive number of seconds",
                    ));
                }
                if Duration::try_from_secs_f64(timeout).is_err() {
                    return Err(OsintCheckError::config(
                        "Invalid timeout: exceeds the supported range",
                    ));
                }
            }
            if let Some(delay) = defaults.delay {
                if !delay.is_finite() || delay < 0.0 {
                    return Err(OsintCheckError::config(
                        "Invalid delay: must be zero or a positive number of seconds",
                    ));
                }
                if Duration::try_from_secs_f64(delay).is_err() {
                    return Err(OsintCheckError::config(
                        "Invalid delay: exceeds the supported range",
                    ));
                }
            }
        }

        Ok(())
    }

    /// Get the local configuration file path (current directory).
    fn get_local_config_path(&self) -> Option<PathBuf> {
        let candidates = ["./osint-check.toml", "./.osint-check.toml"];

        for candidate in &candidates {
            let path = Path::new(candidate);
            if path.exists() {
                return Some(path.to_path_buf());
            }
        }

        None
    }

    /// Get the global configuration file path (home directory).
    fn get_global_config_path(&self) -> Option<PathBuf> {
        if let Some(home) = env::var_os("HOME") {
            let candidates = [".osint-check.toml", "osint-check.toml"];

            for candidate in &candidates {
                let path = Path::new(&home).join(candidate);
                if path.exists() {
                    return Some(path);
                }
            }
        }

        None
    }

    /// Get the XDG configuration file path.
    fn get_xdg_config_path(&self) -> Option<PathBuf> {
        let config_dir = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| Path::new(&home).join(".config")))?;

        let path = config_dir.join("osint-check").join("config.toml");
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }
}

/// Merge two configs; fields set in `overlay` win.
fn merge_configs(base: FileConfig, overlay: FileConfig) -> FileConfig {
    let defaults = match (base.defaults, overlay.defaults) {
        (Some(base), Some(overlay)) => Some(DefaultsConfig {
            region: overlay.region.or(base.region),
            timeout: overlay.timeout.or(base.timeout),
            delay: overlay.delay.or(base.delay),
        }),
        (base, overlay) => overlay.or(base),
    };

    FileConfig { defaults }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_file_valid() {
        let file = write_config(
            r#"
[defaults]
region = "GB"
timeout = 5.0
delay = 1.0
"#,
        );

        let manager = ConfigManager::new(false);
        let config = manager.load_file(file.path()).unwrap();
        let defaults = config.defaults.unwrap();

        assert_eq!(defaults.region.as_deref(), Some("GB"));
        assert_eq!(defaults.timeout, Some(5.0));
        assert_eq!(defaults.delay, Some(1.0));
    }

    #[test]
    fn test_load_file_missing() {
        let manager = ConfigManager::new(false);
        let err = manager.load_file("/nonexistent/osint-check.toml").unwrap_err();
        assert!(matches!(err, OsintCheckError::FileError { .. }));
    }

    #[test]
    fn test_load_file_bad_toml() {
        let file = write_config("not [valid toml");
        let manager = ConfigManager::new(false);
        let err = manager.load_file(file.path()).unwrap_err();
        assert!(matches!(err, OsintCheckError::ConfigError { .. }));
    }

    #[test]
    fn test_load_file_rejects_bad_region() {
        let file = write_config("[defaults]\nregion = \"USA\"\n");
        let manager = ConfigManager::new(false);
        assert!(manager.load_file(file.path()).is_err());
    }

    #[test]
    fn test_load_file_rejects_negative_delay() {
        let file = write_config("[defaults]\ndelay = -1.0\n");
        let manager = ConfigManager::new(false);
        assert!(manager.load_file(file.path()).is_err());
    }

    #[test]
    fn test_load_file_rejects_oversized_durations() {
        // Values beyond Duration's range must fail validation, not panic later
        let manager = ConfigManager::new(false);

        let file = write_config("[defaults]\ntimeout = 1e20\n");
        let err = manager.load_file(file.path()).unwrap_err();
        assert!(matches!(err, OsintCheckError::ConfigError { .. }));

        let file = write_config("[defaults]\ndelay = 1e20\n");
        assert!(manager.load_file(file.path()).is_err());
    }

    #[test]
    fn test_merge_overlay_wins() {
        let base = FileConfig {
            defaults: Some(DefaultsConfig {
                region: Some("US".to_string()),
                timeout: Some(8.0),
                delay: None,
            }),
        };
        let overlay = FileConfig {
            defaults: Some(DefaultsConfig {
                region: Some("GB".to_string()),
                timeout: None,
                delay: Some(0.25),
            }),
        };

        let merged = merge_configs(base, overlay);
        let defaults = merged.defaults.unwrap();
        assert_eq!(defaults.region.as_deref(), Some("GB"));
        assert_eq!(defaults.timeout, Some(8.0));
        assert_eq!(defaults.delay, Some(0.25));
    }
}
