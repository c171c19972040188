use crate::{
    core::{config::EdgePadding, geo::LatLngBounds},
    Result,
};
use serde::{Deserialize, Serialize};

/// Instruction for a map surface: show `bounds`, keeping `edge_padding`
/// pixels clear on each side.
///
/// How that becomes a center and zoom is up to the surface, since it depends
/// on the surface's own viewport size and projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraDirective {
    pub bounds: LatLngBounds,
    pub edge_padding: EdgePadding,
    pub animated: bool,
}

impl CameraDirective {
    pub fn new(bounds: LatLngBounds, edge_padding: EdgePadding) -> Self {
        Self {
            bounds,
            edge_padding,
            animated: true,
        }
    }

    pub fn with_animation(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// True when the directive targets a single point
    pub fn is_degenerate(&self) -> bool {
        self.bounds.is_degenerate()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
