use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON data file holding schedule and vendors.
    pub data_file: String,
    /// Couple display name printed in the run sheet header.
    #[serde(default = "default_couple")]
    pub couple: String,
    /// Venue line for the run sheet header; empty = omitted.
    #[serde(default)]
    pub location: String,
    /// Locale for long date formatting (de_DE, en_US, it_IT, ...).
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_couple() -> String {
    "Brautpaar".to_string()
}

fn default_locale() -> String {
    "de_DE".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file_path().to_string_lossy().to_string(),
            couple: default_couple(),
            location: String::new(),
            locale: default_locale(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(".runsheet")
        } else {
            PathBuf::from(".runsheet")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("runsheet.conf")
    }

    pub fn data_file_path() -> PathBuf {
        Self::config_dir().join("runsheet.json")
    }

    /// Load configuration from file, or fall back to defaults when no
    /// config file exists yet.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Create the config directory, config file, and an empty data file.
    pub fn init_all(custom_data_file: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_path = match custom_data_file {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::data_file_path(),
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("Config file: {}", Self::config_file().display());
        }

        if !data_path.exists() {
            if let Some(parent) = data_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let empty = crate::persist::ProjectData::default();
            crate::persist::save(&data_path, &empty)?;
        }

        println!("Data file:   {}", data_path.display());

        Ok(())
    }

    /// Print the active configuration as YAML.
    pub fn print(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        print!("{yaml}");
        io::stdout().flush().ok();
        Ok(())
    }
}
