//! Scene tuning values
//!
//! Defaults reproduce the classic demo: 25 balls of radius 10-20 moving at
//! up to 7 px/frame, and a white evil circle of radius 10. On the web an
//! override may be stored as JSON in LocalStorage; natively it is read from
//! a file passed on the command line.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a config can be rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("ball size range {min}..={max} is empty or not positive")]
    InvalidSizeRange { min: i32, max: i32 },
    #[error("ball count must be at least 1")]
    InvalidBallCount,
    #[error("max speed {0} is negative")]
    NegativeSpeed(i32),
    #[error("arena {width}x{height} is too small for balls of radius {max_size} at speed {max_speed}")]
    ArenaTooSmall {
        width: f64,
        height: f64,
        max_size: i32,
        max_speed: i32,
    },
}

/// Scene configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Balls created at bootstrap (population never changes afterwards)
    pub ball_count: usize,
    /// Smallest ball radius
    pub min_ball_size: i32,
    /// Largest ball radius
    pub max_ball_size: i32,
    /// Velocity components are drawn from [-max_speed, max_speed]
    pub max_speed: i32,
    /// Evil circle radius
    pub evil_size: f64,
    /// Evil circle movement per frame while a key is held
    pub evil_step: f64,
    /// Evil circle outline width
    pub evil_line_width: f64,
    /// Opacity of the per-frame black fill (lower = longer trails)
    pub trail_alpha: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ball_count: BALL_COUNT,
            min_ball_size: MIN_BALL_SIZE,
            max_ball_size: MAX_BALL_SIZE,
            max_speed: MAX_SPEED,
            evil_size: EVIL_SIZE,
            evil_step: EVIL_STEP,
            evil_line_width: EVIL_LINE_WIDTH,
            trail_alpha: TRAIL_ALPHA,
        }
    }
}

impl SceneConfig {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bouncing_balls_config";

    /// Parse a JSON config; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check internal consistency (independent of canvas size)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_ball_size <= 0 || self.min_ball_size > self.max_ball_size {
            return Err(ConfigError::InvalidSizeRange {
                min: self.min_ball_size,
                max: self.max_ball_size,
            });
        }
        if self.ball_count == 0 {
            return Err(ConfigError::InvalidBallCount);
        }
        if self.max_speed < 0 {
            return Err(ConfigError::NegativeSpeed(self.max_speed));
        }
        Ok(())
    }

    /// Check that the arena leaves room for the largest ball to bounce
    pub fn check_arena(&self, width: f64, height: f64) -> Result<(), ConfigError> {
        let needed = 2.0 * f64::from(self.max_ball_size + self.max_speed);
        if width < needed || height < needed {
            return Err(ConfigError::ArenaTooSmall {
                width,
                height,
                max_size: self.max_ball_size,
                max_speed: self.max_speed,
            });
        }
        Ok(())
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native: config comes from an optional file path
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::from_path(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
