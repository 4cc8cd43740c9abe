use crate::errors::AppResult;
use crate::utils::path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "signalbook.conf";

/// Application settings.
///
/// Read from `signalbook.conf` (YAML) in the base directory when present.
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory that roster and log file names are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
    /// Fallback roster, must exist for a session to start.
    #[serde(default = "default_roster")]
    pub default_roster: String,
    /// Roster loaded when the operator just presses Enter, and saved by default.
    #[serde(default = "default_user_roster")]
    pub user_roster: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_roster() -> String {
    "defaultConfig.json".to_string()
}
fn default_user_roster() -> String {
    "userConfig.json".to_string()
}
fn default_log_file() -> String {
    "Radio Log.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: path::exe_dir(),
            default_roster: default_roster(),
            user_roster: default_user_roster(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Return the full path of the config file inside `base_dir`
    pub fn config_file(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE_NAME)
    }

    /// Load configuration from `base_dir`, or return defaults if not found
    pub fn load(base_dir: &Path) -> AppResult<Self> {
        let file = Self::config_file(base_dir);

        let content = if file.exists() {
            fs::read_to_string(&file)?
        } else {
            String::new()
        };

        let mut cfg = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str::<Config>(&content)?
        };

        cfg.base_dir = base_dir.to_path_buf();
        Ok(cfg)
    }

    /// Resolve a file name against the base directory.
    pub fn resolve(&self, file_name: &str) -> PathBuf {
        path::resolve(&self.base_dir, file_name)
    }
}
