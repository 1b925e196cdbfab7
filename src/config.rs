use crate::{theme::AppTheme, time_signature::TimeSignature, zoom_controls::RulerMode};
use serde::{Deserialize, Serialize};
use std::{
    fs::{create_dir_all, read_to_string, write},
    io,
    path::PathBuf,
};
use thiserror::Error;

const CONFIG_FILE: &str = "music_bench.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration directory on this platform")]
    NoConfigDir,
    #[error("couldn't access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("couldn't serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    pub theme: AppTheme,
    /// offset of the divider shared by both split panes, in pixels
    pub divider_offset: u32,
    pub bpm: u16,
    pub time_signature: TimeSignature,
    /// timeline zoom in percent
    pub zoom: u8,
    pub ruler: RulerMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: AppTheme::default(),
            divider_offset: 350,
            bpm: 128,
            time_signature: TimeSignature::default(),
            zoom: 50,
            ruler: RulerMode::default(),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Loads the config file, writing the defaults if there is none yet.
    ///
    /// Any failure falls back to the defaults so the window always opens.
    #[must_use]
    pub fn read() -> Self {
        match Self::try_read() {
            Ok(config) => config,
            Err(err) => {
                log::warn!("using default configuration: {err}");
                Self::default()
            }
        }
    }

    fn try_read() -> Result<Self, ConfigError> {
        let path = Self::path()?;

        match read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                let config = Self::default();
                config.write()?;
                log::info!("created {}", path.display());
                Ok(config)
            }
            Err(source) => Err(ConfigError::Io { path, source }),
        }
    }

    pub fn write(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_owned(),
                source,
            })?;
        }

        write(&path, self.to_toml()?).map_err(|source| ConfigError::Io { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_survive_toml() {
        let config = Config::default();
        let text = config.to_toml().unwrap();

        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn missing_keys_fall_back() {
        let config = Config::parse("divider_offset = 420\nbpm = 90\n").unwrap();

        assert_eq!(config.divider_offset, 420);
        assert_eq!(config.bpm, 90);
        assert_eq!(config.zoom, 50);
        assert_eq!(config.time_signature, TimeSignature::default());
    }

    #[test]
    fn enums_are_readable() {
        let config =
            Config::parse("theme = \"Light\"\ntime_signature = \"SixEight\"\nruler = \"Measures\"\n")
                .unwrap();

        assert_eq!(config.theme, AppTheme::Light);
        assert_eq!(config.time_signature, TimeSignature::SixEight);
        assert_eq!(config.ruler, RulerMode::Measures);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            Config::parse("divider_offset = \"wide\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
