use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_students_file")]
    pub students_file: String,
    #[serde(default = "default_attendance_file")]
    pub attendance_file: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_students_file() -> String {
    Config::config_dir()
        .join("students.csv")
        .to_string_lossy()
        .to_string()
}
fn default_attendance_file() -> String {
    Config::config_dir()
        .join("mess_attendance.csv")
        .to_string_lossy()
        .to_string()
}
fn default_log_file() -> String {
    Config::config_dir()
        .join("messlog_log.csv")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            students_file: default_students_file(),
            attendance_file: default_attendance_file(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("messlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".messlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("messlog.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        cfg.students_file = expand(&cfg.students_file);
        cfg.attendance_file = expand(&cfg.attendance_file);
        cfg.log_file = expand(&cfg.log_file);
        Ok(cfg)
    }

    /// Point every data file into `dir` (used by `--data-dir`).
    pub fn with_data_dir(mut self, dir: &str) -> Self {
        let dir = expand_tilde(dir);
        self.students_file = dir.join("students.csv").to_string_lossy().to_string();
        self.attendance_file = dir
            .join("mess_attendance.csv")
            .to_string_lossy()
            .to_string();
        self.log_file = dir.join("messlog_log.csv").to_string_lossy().to_string();
        self
    }

    /// Create the configuration directory and, unless `is_test`, write the
    /// configuration file.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(())
    }
}

fn expand(p: &str) -> String {
    expand_tilde(p).to_string_lossy().to_string()
}
