use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Error;
use serde::Deserialize;
use tracing::debug;

use crate::generators::structs::Palette;

pub const DEFAULT_SIZE: u32 = 1024;
pub const DEFAULT_OUTPUT_DIR: &str = "../../assets/icons";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub version: u32,
    pub size: u32,
    pub output_dir: PathBuf,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: 1,
            size: DEFAULT_SIZE,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            palette: Palette::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.size == 0 {
            return Err(Error::msg("Icon size must be at least 1 pixel"));
        }
        Ok(())
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, size: Option<u32>, output_dir: Option<PathBuf>) -> Self {
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(output_dir) = output_dir {
            self.output_dir = output_dir;
        }
        self
    }
}

fn parse_config(path: &Path, contents: &str) -> Result<Config, Error> {
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let config = if is_toml {
        toml::from_str(contents).map_err(|e| {
            Error::msg(format!(
                "Failed to parse TOML configuration {}: {}",
                path.display(),
                e
            ))
        })?
    } else {
        serde_json::from_str(contents).map_err(|e| {
            Error::msg(format!(
                "Failed to parse JSON configuration {}: {}",
                path.display(),
                e
            ))
        })?
    };

    Ok(config)
}

/// Loads the configuration from `config_path`, or the defaults when no file is given.
pub fn load_configuration(config_path: Option<&Path>) -> Result<Config, Error> {
    let config = match config_path {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|e| {
                Error::msg(format!(
                    "Failed to read configuration file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let config = parse_config(path, &contents)?;
            debug!(path = %path.display(), ?config, "loaded configuration");
            config
        }
        None => Config::default(),
    };

    config.validate()?;

    Ok(config)
}
