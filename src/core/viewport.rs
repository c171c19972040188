use crate::core::config::EdgePadding;
use crate::core::constants::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, TILE_SIZE};
use crate::core::geo::{LatLng, LatLngBounds, Point, EARTH_RADIUS};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Concrete camera placement: where to look and how close
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPosition {
    pub center: LatLng,
    pub zoom: f64,
}

/// The current view of a map surface: center, zoom, and screen dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    min_zoom: f64,
    max_zoom: f64,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM),
            size,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }

    /// Sets the center, clamped to what Web Mercator can show
    pub fn set_center(&mut self, center: LatLng) {
        self.center = LatLng::new(
            LatLng::clamp_lat(center.lat),
            center.lng.clamp(-180.0, 180.0),
        );
    }

    /// Sets the zoom level, clamping to the configured range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = self.clamp_zoom(zoom);
    }

    /// Replaces the zoom range and pulls the current zoom inside it.
    /// Inverted or non-finite limits are rejected and leave the viewport as is.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) -> Result<()> {
        if !(min_zoom.is_finite() && max_zoom.is_finite()) || min_zoom > max_zoom {
            return Err(MapError::Config(format!(
                "min_zoom {min_zoom} must not exceed max_zoom {max_zoom}"
            )));
        }
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.clamp_zoom(self.zoom);
        Ok(())
    }

    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    // f64::clamp panics on inverted bounds, which a deserialized viewport can carry
    fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }

    /// Applies a camera position, honouring the zoom limits
    pub fn apply(&mut self, camera: CameraPosition) {
        self.set_center(camera.center);
        self.set_zoom(camera.zoom);
    }

    pub fn camera(&self) -> CameraPosition {
        CameraPosition {
            center: self.center,
            zoom: self.zoom,
        }
    }

    /// Projects a LatLng to world pixel coordinates (EPSG:3857) at the given zoom
    pub fn project(&self, lat_lng: &LatLng, zoom: Option<f64>) -> Point {
        let scale = TILE_SIZE * 2_f64.powf(zoom.unwrap_or(self.zoom));
        let meters = lat_lng.to_mercator();
        let world = 2.0 * PI * EARTH_RADIUS;

        Point::new(
            (meters.x + PI * EARTH_RADIUS) / world * scale,
            (PI * EARTH_RADIUS - meters.y) / world * scale,
        )
    }

    /// Unprojects world pixel coordinates back to LatLng at the given zoom
    pub fn unproject(&self, pixel: &Point, zoom: Option<f64>) -> LatLng {
        let scale = TILE_SIZE * 2_f64.powf(zoom.unwrap_or(self.zoom));
        let world = 2.0 * PI * EARTH_RADIUS;

        let meters = Point::new(
            pixel.x / scale * world - PI * EARTH_RADIUS,
            PI * EARTH_RADIUS - pixel.y / scale * world,
        );
        LatLng::from_mercator(meters)
    }

    fn half_size(&self) -> Point {
        Point::new(self.size.x / 2.0, self.size.y / 2.0)
    }

    /// Converts a geographical coordinate to container-relative pixels
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng) -> Point {
        let origin = self.project(&self.center, None).subtract(&self.half_size());
        self.project(lat_lng, None).subtract(&origin)
    }

    /// Converts container-relative pixels back to a geographical coordinate
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        let origin = self.project(&self.center, None).subtract(&self.half_size());
        self.unproject(&pixel.add(&origin), None)
    }

    /// Computes the camera that shows `bounds` inside the viewport inset by
    /// `padding`.
    ///
    /// The zoom is the largest (fractional) level at which the projected box
    /// fits the padded area, clamped to the zoom limits. Zero-area bounds use
    /// `fallback_zoom` instead. Asymmetric padding shifts the center so the
    /// box sits in the middle of the padded area.
    pub fn camera_for_bounds(
        &self,
        bounds: &LatLngBounds,
        padding: &EdgePadding,
        fallback_zoom: f64,
    ) -> CameraPosition {
        let nw = LatLng::new(bounds.north_east.lat, bounds.south_west.lng);
        let se = LatLng::new(bounds.south_west.lat, bounds.north_east.lng);

        let nw_px = self.project(&nw, Some(0.0));
        let se_px = self.project(&se, Some(0.0));
        let box_width = (se_px.x - nw_px.x).abs();
        let box_height = (se_px.y - nw_px.y).abs();

        let available = Point::new(
            self.size.x - padding.horizontal(),
            self.size.y - padding.vertical(),
        );

        let zoom = if box_width == 0.0 && box_height == 0.0 {
            fallback_zoom
        } else if available.x <= 0.0 || available.y <= 0.0 {
            self.min_zoom
        } else {
            let fit_x = if box_width > 0.0 {
                available.x / box_width
            } else {
                f64::INFINITY
            };
            let fit_y = if box_height > 0.0 {
                available.y / box_height
            } else {
                f64::INFINITY
            };
            fit_x.min(fit_y).log2()
        };
        let zoom = self.clamp_zoom(zoom);

        let box_center = Point::new((nw_px.x + se_px.x) / 2.0, (nw_px.y + se_px.y) / 2.0);
        let scale = 2_f64.powf(zoom);
        let shift = Point::new(
            (padding.left - padding.right) / 2.0,
            (padding.top - padding.bottom) / 2.0,
        );
        let center_px = Point::new(box_center.x * scale - shift.x, box_center.y * scale - shift.y);

        CameraPosition {
            center: self.unproject(&center_px, Some(zoom)),
            zoom,
        }
    }
}
