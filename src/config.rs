//! Configuration file support.
//!
//! Loads application defaults from `~/.config/pixelwin/config.toml`:
//! window title and size, presentation mode, sound volume. Missing file
//! means defaults; out-of-range values are clamped with a warning.
//!
//! # Example TOML
//! ```toml
//! [window]
//! title = "my app"
//! width = 640
//! height = 400
//! fullscreen = false
//!
//! [present]
//! interpolation = "linear"
//!
//! [sound]
//! volume = 0.8
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::present::Interpolation;

const MAX_WINDOW_DIM: i32 = 16384;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub present: PresentConfig,

    #[serde(default)]
    pub sound: SoundConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window title.
    pub title: String,
    /// Initial client-area width in pixels.
    pub width: i32,
    /// Initial client-area height in pixels.
    pub height: i32,
    /// Start covering the whole display.
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "pixelwin".into(),
            width: 640,
            height: 400,
            fullscreen: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct PresentConfig {
    /// How the bitmap is stretched into the window.
    #[serde(default)]
    pub interpolation: Interpolation,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Playback volume in `[0, 1]`.
    pub volume: f32,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self { volume: 1.0 }
    }
}

impl Config {
    /// Loads the config from the default location, falling back to
    /// defaults if no file exists.
    pub fn load() -> Result<Config, Error> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Loads and validates the config at `path`.
    pub fn load_from(path: &Path) -> Result<Config, Error> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_owned(),
            source,
        })?;
        let mut config: Config =
            toml::from_str(&contents).map_err(|source| Error::ConfigParse {
                path: path.to_owned(),
                source,
            })?;
        config.validate_and_clamp();
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Default config file location, platform config dir permitting.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pixelwin").join("config.toml"))
    }

    /// Clamps out-of-range values to the nearest valid value, warning
    /// about each adjustment.
    fn validate_and_clamp(&mut self) {
        if !(1..=MAX_WINDOW_DIM).contains(&self.window.width) {
            warn!(
                "invalid window width {}, clamping to 1-{MAX_WINDOW_DIM}",
                self.window.width
            );
            self.window.width = self.window.width.clamp(1, MAX_WINDOW_DIM);
        }
        if !(1..=MAX_WINDOW_DIM).contains(&self.window.height) {
            warn!(
                "invalid window height {}, clamping to 1-{MAX_WINDOW_DIM}",
                self.window.height
            );
            self.window.height = self.window.height.clamp(1, MAX_WINDOW_DIM);
        }
        if !(0.0..=1.0).contains(&self.sound.volume) {
            warn!(
                "invalid sound volume {:.2}, clamping to 0.0-1.0",
                self.sound.volume
            );
            self.sound.volume = self.sound.volume.clamp(0.0, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 400);
        assert_eq!(config.present.interpolation, Interpolation::None);
        assert_eq!(config.sound.volume, 1.0);
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let file = write_config("[window]\ntitle = \"demo\"\nwidth = 320\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.window.title, "demo");
        assert_eq!(config.window.width, 320);
        assert_eq!(config.window.height, 400);
    }

    #[test]
    fn interpolation_parses_from_lowercase_names() {
        let file = write_config("[present]\ninterpolation = \"linear\"\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.present.interpolation, Interpolation::Linear);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let file = write_config(
            "[window]\nwidth = 0\nheight = 99999\n\n[sound]\nvolume = 3.5\n",
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.window.width, 1);
        assert_eq!(config.window.height, MAX_WINDOW_DIM);
        assert_eq!(config.sound.volume, 1.0);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let file = write_config("[window\nwidth = ");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }
}
