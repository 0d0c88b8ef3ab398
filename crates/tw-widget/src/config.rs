//! Widget configuration
//!
//! All tunables live here so scene scale assumptions (camera standoff, arrow
//! size, rim highlight thresholds) can be adjusted without code changes.
//! Stored on disk as RON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tw_core::Color;

use crate::error::ConfigError;

/// Widget camera rig configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraRigConfig {
    /// Distance from the widget origin to the widget camera
    pub standoff_distance: f32,
    /// Near clipping plane of the widget camera before the first sync
    pub near: f32,
    /// Far clipping plane of the widget camera before the first sync
    pub far: f32,
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            standoff_distance: 18.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Rim highlight configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HighlightConfig {
    /// Color of the hovered or dragged handle
    pub color: Color,
    /// Rim factor threshold
    pub lower_bound: f32,
    /// Rim intensity multiplier
    pub scale: f32,
    /// Depth test handles against each other
    pub depth_test: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0, 1.0],
            lower_bound: 0.6,
            scale: 1.25,
            depth_test: true,
        }
    }
}

/// Base color per handle (RGBA)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AxisColors {
    pub x: Color,
    pub y: Color,
    pub z: Color,
}

impl Default for AxisColors {
    fn default() -> Self {
        Self {
            x: [1.0, 0.0, 0.0, 1.0],
            y: [0.0, 1.0, 0.0, 1.0],
            z: [0.0, 0.0, 1.0, 1.0],
        }
    }
}

/// Arrow and collider geometry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArrowConfig {
    /// Shaft length
    pub base_length: f32,
    /// Shaft radius
    pub base_radius: f32,
    /// Cone length
    pub cone_length: f32,
    /// Cone base radius
    pub cone_radius: f32,
    /// Segments around the shaft and cone
    pub segments: u32,
    /// Cross-section of the box collider used for picking
    pub collider_width: f32,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            base_length: 2.0,
            base_radius: 0.035,
            cone_length: 0.4,
            cone_radius: 0.15,
            segments: 16,
            collider_width: 0.15,
        }
    }
}

impl ArrowConfig {
    /// Shaft plus cone
    pub fn total_length(&self) -> f32 {
        self.base_length + self.cone_length
    }
}

/// Complete widget configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WidgetConfig {
    /// Camera rig settings
    #[serde(default)]
    pub camera: CameraRigConfig,
    /// Highlight settings
    #[serde(default)]
    pub highlight: HighlightConfig,
    /// Handle colors
    #[serde(default)]
    pub colors: AxisColors,
    /// Handle geometry
    #[serde(default)]
    pub arrow: ArrowConfig,
}

impl WidgetConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron_str(&content)
    }

    /// Parse and validate a RON document
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = self.to_ron_string()?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))
    }

    /// Serialize to pretty RON
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Reject values the widget cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("camera.standoff_distance", self.camera.standoff_distance),
            ("camera.near", self.camera.near),
            ("arrow.base_length", self.arrow.base_length),
            ("arrow.base_radius", self.arrow.base_radius),
            ("arrow.cone_length", self.arrow.cone_length),
            ("arrow.cone_radius", self.arrow.cone_radius),
            ("arrow.collider_width", self.arrow.collider_width),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                let message = format!("{name} must be positive, got {value}");
                return Err(ConfigError::Invalid(message));
            }
        }
        if self.camera.far <= self.camera.near {
            return Err(ConfigError::Invalid(format!(
                "camera.far ({}) must exceed camera.near ({})",
                self.camera.far, self.camera.near
            )));
        }
        if self.arrow.segments < 3 {
            return Err(ConfigError::Invalid(format!(
                "arrow.segments must be at least 3, got {}",
                self.arrow.segments
            )));
        }
        Ok(())
    }
}
