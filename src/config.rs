use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::tui::Section;

pub const CONFIG_ENV: &str = "INTERVIEWR_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `tracing` filter directive, e.g. "info" or "interviewr=debug".
    pub log_level: String,
    /// Overrides the default log file under the data directory.
    pub log_file: Option<PathBuf>,
    /// Start the dashboard with the demo applications.
    pub seed_sample_data: bool,
    pub default_tab: Section,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            seed_sample_data: true,
            default_tab: Section::Resume,
        }
    }
}

impl Config {
    /// Load from `$INTERVIEWR_CONFIG` or the platform config directory.
    /// A missing file yields defaults.
    pub fn load() -> Result<(Self, PathBuf)> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(p) => PathBuf::from(p),
            None => default_config_path(),
        };
        let config = Self::from_file(&path)?;
        Ok((config, path))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| data_dir().join("interviewr.log"))
    }
}

fn default_config_path() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "interviewr") {
        proj_dirs.config_dir().join("config.json")
    } else {
        PathBuf::from("interviewr.json")
    }
}

fn data_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "interviewr") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_file(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.seed_sample_data);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"log_level": "debug", "default_tab": "status"}}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.default_tab, Section::Status);
        assert!(config.seed_sample_data);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn log_file_override_wins() {
        let config = Config {
            log_file: Some(PathBuf::from("/tmp/custom.log")),
            ..Default::default()
        };
        assert_eq!(config.log_path(), PathBuf::from("/tmp/custom.log"));
    }
}
