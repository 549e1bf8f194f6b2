use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_truncate_width")]
    pub truncate_width: usize,
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_data_file() -> String {
    Config::data_file_path().to_string_lossy().to_string()
}
fn default_truncate_width() -> usize {
    20
}
fn default_confirm_delete() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            truncate_width: default_truncate_width(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("gerenciador")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".gerenciador")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gerenciador.conf")
    }

    /// Return the default location of the client table
    pub fn data_file_path() -> PathBuf {
        Self::config_dir().join("tabela_clientes.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Self::from_yaml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file parses as YAML null, treat it like a missing one
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(content)?;
        if cfg.truncate_width == 0 {
            return Err(AppError::Config(
                "truncate_width must be greater than zero".into(),
            ));
        }
        Ok(cfg)
    }

    /// Data file path with `~/` expanded
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// Initialize the configuration file and return the data file path to use
    pub fn init_all(custom_file: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // data file: user provided or default
        let data_path = match custom_file {
            Some(name) => expand_tilde(&name),
            None => Self::data_file_path(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                data_file: data_path.to_string_lossy().to_string(),
                ..Config::default()
            };

            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(data_path)
    }
}
