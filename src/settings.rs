//! Game settings
//!
//! Everything the world needs from the host is injected through `Settings`
//! rather than read from globals.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Fill colors (any CSS color string)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub sky: String,
    pub ground: String,
    pub person: String,
    pub obstacle: String,
    pub cloud: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sky: "blue".to_string(),
            ground: "brown".to_string(),
            person: "red".to_string(),
            obstacle: "black".to_string(),
            cloud: "white".to_string(),
        }
    }
}

impl Palette {
    fn validate(&self) -> Result<(), ConfigError> {
        let entries = [
            ("sky", &self.sky),
            ("ground", &self.ground),
            ("person", &self.person),
            ("obstacle", &self.obstacle),
            ("cloud", &self.cloud),
        ];
        for (name, color) in entries {
            if color.trim().is_empty() {
                return Err(ConfigError::InvalidColor(name));
            }
        }
        Ok(())
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Canvas width in pixels
    pub screen_width: f32,
    /// Canvas height in pixels
    pub screen_height: f32,
    /// Leftward scroll per tick (obstacles full rate, clouds half)
    pub scroll_speed: f32,
    pub palette: Palette,

    // === Debug ===
    /// Detect collisions but never end the run
    pub invincible: bool,
    /// Fixed spawn seed (host picks one when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            palette: Palette::default(),
            invincible: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Default settings sized to a concrete canvas
    pub fn with_screen(width: f32, height: f32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..Self::default()
        }
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a JSON settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.screen_width, self.screen_height);
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidScreen { width, height });
        }
        if !self.scroll_speed.is_finite() || self.scroll_speed <= 0.0 {
            return Err(ConfigError::InvalidScrollSpeed(self.scroll_speed));
        }
        self.palette.validate()
    }

    /// Y coordinate of the ground line (also the sky/ground split)
    pub fn ground_y(&self) -> f32 {
        (self.screen_height * GROUND_RATIO).floor()
    }

    pub fn sky_height(&self) -> f32 {
        self.ground_y()
    }

    pub fn ground_height(&self) -> f32 {
        self.screen_height - self.sky_height()
    }
}
