use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::consts::{
    FOV_DEGREES, FPS, HEIGHT, MINIMAP_SCALE_FACTOR, PLAYER_MOVE_SPEED, PLAYER_ROT_SPEED_DEGREES,
    WIDTH,
};
use crate::error::ConfigError;

/// Runtime settings, read from a TOML file. Every field is optional there.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub fps: u32,
    pub fov_degrees: f32,
    pub minimap_scale: f32,
    pub move_speed: f32,
    pub rotation_speed_degrees: f32,
    pub map: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: WIDTH,
            height: HEIGHT,
            fps: FPS,
            fov_degrees: FOV_DEGREES,
            minimap_scale: MINIMAP_SCALE_FACTOR,
            move_speed: PLAYER_MOVE_SPEED,
            rotation_speed_degrees: PLAYER_ROT_SPEED_DEGREES,
            map: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid {
                field: "width/height",
                reason: format!("window must not be empty, got {}x{}", self.width, self.height),
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::Invalid {
                field: "fps",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid {
                field: "fov_degrees",
                reason: format!("must be inside (0, 180), got {}", self.fov_degrees),
            });
        }
        if self.minimap_scale.is_nan() || self.minimap_scale < 0.0 {
            return Err(ConfigError::Invalid {
                field: "minimap_scale",
                reason: format!("must not be negative, got {}", self.minimap_scale),
            });
        }
        Ok(())
    }

    pub fn fov(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed_degrees.to_radians()
    }

    /// One ray per screen column.
    pub fn num_rays(&self) -> usize {
        self.width
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}

/// Reads `path`, falling back to defaults when the file does not exist.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let config = Config::from_toml_str(&contents)?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}
