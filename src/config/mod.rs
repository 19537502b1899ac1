use crate::errors::{AppError, AppResult};
use crate::models::category::CategorySet;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".rmaintlog";
const CONFIG_NAME: &str = "rmaintlog.conf";
const DB_NAME: &str = "rmaintlog.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_notes_width")]
    pub notes_width: usize,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

/// Categories offered by the original edit dialog.
fn default_categories() -> Vec<String> {
    ["แอร์Daikin", "แอร์Mitsubishi", "ปั๊มน้ำ", "ระบบไฟ", "ระบบน้ำ"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_currency() -> String {
    "THB".to_string()
}

fn default_notes_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            categories: default_categories(),
            currency: default_currency(),
            notes_width: default_notes_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_NAME)
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DB_NAME)
    }

    /// Database path with `~` expanded.
    pub fn database_path(&self) -> String {
        expand_tilde(&self.database).to_string_lossy().to_string()
    }

    pub fn category_set(&self) -> CategorySet {
        CategorySet::new(self.categories.iter().cloned())
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
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;
        let yaml = self.to_yaml()?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize the configuration file and return the config to use.
    ///
    /// A relative `custom_db` is placed inside the config directory.
    /// In test mode nothing is written to the config directory.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() {
                    p
                } else {
                    Self::config_dir().join(p)
                }
            }
            None => Self::database_file(),
        };

        let mut config = Config::load().unwrap_or_default();
        config.database = db_path.to_string_lossy().to_string();

        if !is_test {
            config.save()?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(dir) = db_path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        Ok(config)
    }
}
