use crate::errors::{AppError, AppResult};
use crate::models::task_type::TaskCatalog;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Days before today covered by `report` when no range is given.
    #[serde(default = "default_window_days")]
    pub default_window_days: i64,
    #[serde(default)]
    pub task_types: TaskCatalog,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_window_days() -> i64 {
    7
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_window_days: default_window_days(),
            task_types: TaskCatalog::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.prodtracker`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".prodtracker")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("prodtracker.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("prodtracker.sqlite")
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        if cfg.task_types.is_empty() {
            return Err(AppError::Config(format!(
                "{}: task_types must list at least one task type",
                path.display()
            )));
        }
        if cfg.default_window_days < 0 {
            return Err(AppError::Config(format!(
                "{}: default_window_days must not be negative",
                path.display()
            )));
        }
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(self.to_yaml()?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("nope.conf")).unwrap();
        assert_eq!(cfg.default_window_days, 7);
        assert_eq!(cfg.task_types, TaskCatalog::default());
    }

    #[test]
    fn partial_file_falls_back_per_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.conf");
        fs::write(&path, "database: /tmp/x.sqlite\n").unwrap();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.task_types.len(), 7);
    }

    #[test]
    fn save_then_load_keeps_custom_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("c.conf");
        let cfg = Config {
            database: "db.sqlite".into(),
            default_window_days: 14,
            task_types: TaskCatalog::new(vec![
                crate::models::task_type::TaskType::new("Chats", 2.5),
            ]),
        };
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn empty_catalog_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("e.conf");
        fs::write(&path, "task_types: []\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn negative_window_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("w.conf");
        fs::write(&path, "default_window_days: -3\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(AppError::Config(_))
        ));
    }
}
