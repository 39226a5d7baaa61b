//! Configuration management module.
//!
//! This module loads the optional configuration file, which controls the log
//! level, store seeding and password hashing cost. The file is never written.

mod error;

pub use error::ConfigError;

use crate::validation::Hasher;
use log::LevelFilter;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/usermaker";

/// Oversees the application configuration.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub seed: bool,
    pub hash: HashConfig,
    file_path: Option<PathBuf>,
}

/// Argon2 cost parameters.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashConfig {
    fn default() -> Self {
        HashConfig {
            memory_kib: 19 * 1024,
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// Define specification for configuration file.
///
#[derive(Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default = "default_seed")]
    pub seed: bool,
    #[serde(default)]
    pub hash: HashConfig,
}

fn default_seed() -> bool {
    true
}

impl Config {
    /// Return a new instance with default values.
    ///
    pub fn new() -> Config {
        Config {
            log_level: LevelFilter::Info,
            seed: default_seed(),
            hash: HashConfig::default(),
            file_path: None,
        }
    }

    /// Try to load the configuration file from the custom directory if
    /// provided, otherwise from the default directory. A missing file leaves
    /// the defaults in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), ConfigError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };
        let file_path = dir_path.join(FILE_NAME);

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            self.apply_yaml(&contents)?;
        }

        self.file_path = Some(file_path);
        Ok(())
    }

    /// Override values with those present in the YAML document.
    ///
    pub fn apply_yaml(&mut self, contents: &str) -> Result<(), ConfigError> {
        if contents.trim().is_empty() {
            return Ok(());
        }
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        if let Some(level) = data.log_level {
            self.log_level =
                LevelFilter::from_str(&level).map_err(|_| ConfigError::InvalidLogLevel(level))?;
        }
        self.seed = data.seed;
        self.hash = data.hash;
        Ok(())
    }

    /// Return the path of the configuration file once `load` ran.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Build the password hasher for the configured costs.
    ///
    pub fn hasher(&self) -> Result<Hasher, ConfigError> {
        Hasher::with_params(
            self.hash.memory_kib,
            self.hash.iterations,
            self.hash.parallelism,
        )
        .map_err(|e| ConfigError::InvalidHashParams(e.to_string()))
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, ConfigError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(DEFAULT_DIRECTORY_PATH)),
            None => Err(ConfigError::HomeDirectoryNotFound),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
