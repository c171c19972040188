//! Configuration for the initial camera, zoom limits and camera fitting
//!
//! Options are plain structs with sensible defaults, and a couple of named
//! presets for common screen layouts. Everything is serde-friendly so hosts
//! can ship the settings as JSON.

use crate::core::constants::{
    DEFAULT_CENTER, DEFAULT_EDGE_PADDING, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_ZOOM,
};
use crate::core::geo::LatLng;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Pixel insets kept clear around fitted bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgePadding {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgePadding {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on all four sides
    pub fn uniform(amount: f64) -> Self {
        Self::new(amount, amount, amount, amount)
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    fn is_valid(&self) -> bool {
        [self.top, self.left, self.bottom, self.right]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl Default for EdgePadding {
    fn default() -> Self {
        Self::uniform(DEFAULT_EDGE_PADDING)
    }
}

/// How camera directives are produced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraFitOptions {
    pub edge_padding: EdgePadding,
    /// Whether the surface should animate towards the fitted camera
    pub animated: bool,
}

impl Default for CameraFitOptions {
    fn default() -> Self {
        Self {
            edge_padding: EdgePadding::default(),
            animated: true,
        }
    }
}

/// Named presets for the map screen
#[derive(Debug, Clone, PartialEq)]
pub enum MapProfile {
    /// Defaults of the tap-to-pin screen
    Standard,
    /// Tighter padding and snapping camera, for small embedded maps
    Compact,
    Custom(MapOptions),
}

impl MapProfile {
    pub fn resolve(&self) -> MapOptions {
        match self {
            Self::Standard => MapOptions::default(),
            Self::Compact => MapOptions {
                fit: CameraFitOptions {
                    edge_padding: EdgePadding::uniform(20.0),
                    animated: false,
                },
                ..MapOptions::default()
            },
            Self::Custom(options) => options.clone(),
        }
    }
}

impl Default for MapProfile {
    fn default() -> Self {
        Self::Standard
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    pub initial_center: LatLng,
    pub initial_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Gesture hint for the host surface. Headless surfaces never rotate.
    pub rotate_enabled: bool,
    /// Gesture hint for the host surface. Headless surfaces never tilt.
    pub tilt_enabled: bool,
    pub fit: CameraFitOptions,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            initial_center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            initial_zoom: DEFAULT_ZOOM,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            rotate_enabled: false,
            tilt_enabled: false,
            fit: CameraFitOptions::default(),
        }
    }
}

impl MapOptions {
    /// Parses options from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let options: MapOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.initial_center.is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "initial center ({}, {})",
                self.initial_center.lat, self.initial_center.lng
            )));
        }
        if !(self.min_zoom.is_finite() && self.max_zoom.is_finite())
            || self.min_zoom > self.max_zoom
        {
            return Err(MapError::Config(format!(
                "min_zoom {} must not exceed max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if !self.fit.edge_padding.is_valid() {
            return Err(MapError::Config(
                "edge padding must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Initial zoom clamped into the allowed range. Does not panic on
    /// unvalidated options.
    pub fn clamped_initial_zoom(&self) -> f64 {
        self.initial_zoom.max(self.min_zoom).min(self.max_zoom)
    }
}
