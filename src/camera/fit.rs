//! Bounding box and camera-fit computation over placed markers
//!
//! Longitudes are treated as plain numbers. A set of markers on both sides of
//! the antimeridian produces a box spanning the long way round the globe.

use crate::{
    camera::directive::CameraDirective,
    core::{config::CameraFitOptions, geo::LatLngBounds},
    layers::marker::Marker,
};

/// Smallest box containing every marker, or `None` when there are none
pub fn bounding_box(markers: &[Marker]) -> Option<LatLngBounds> {
    let (first, rest) = markers.split_first()?;

    let mut bounds = first.bounds();
    for marker in rest {
        bounds.extend(&marker.position());
    }

    log::trace!(
        "bounds over {} markers: sw=({}, {}) ne=({}, {})",
        markers.len(),
        bounds.south_west.lat,
        bounds.south_west.lng,
        bounds.north_east.lat,
        bounds.north_east.lng
    );
    Some(bounds)
}

/// Turns the current marker set into camera directives
#[derive(Debug, Clone, Default)]
pub struct CameraFitEngine {
    options: CameraFitOptions,
}

impl CameraFitEngine {
    pub fn new(options: CameraFitOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CameraFitOptions {
        &self.options
    }

    /// Directive framing all `markers`; `None` leaves the camera alone
    pub fn fit(&self, markers: &[Marker]) -> Option<CameraDirective> {
        let bounds = bounding_box(markers)?;
        let directive = CameraDirective::new(bounds, self.options.edge_padding)
            .with_animation(self.options.animated);

        log::debug!("camera directive: {:?}", directive);
        Some(directive)
    }
}
