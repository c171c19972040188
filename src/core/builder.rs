//! Session builder for fluent API configuration
//!
//! Starts from a [`MapProfile`] preset and lets callers override individual
//! options before wiring the session to a surface.

use crate::{
    core::{
        config::{CameraFitOptions, EdgePadding, MapOptions, MapProfile},
        constants::DEFAULT_VIEWPORT_SIZE,
        geo::{LatLng, Point},
        session::MarkerSession,
    },
    surface::{HeadlessSurface, MapSurface},
    Result,
};

/// Builder for creating and configuring [`MarkerSession`] instances
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    options: MapOptions,
    /// Viewport size for headless surfaces
    size: Point,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::with_profile(MapProfile::default())
    }

    pub fn with_profile(profile: MapProfile) -> Self {
        Self {
            options: profile.resolve(),
            size: Point::new(DEFAULT_VIEWPORT_SIZE.0, DEFAULT_VIEWPORT_SIZE.1),
        }
    }

    /// Replace every option at once
    pub fn with_options(mut self, options: MapOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the initial center and zoom level
    pub fn with_center_and_zoom(mut self, center: LatLng, zoom: f64) -> Self {
        self.options.initial_center = center;
        self.options.initial_zoom = zoom;
        self
    }

    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.options.min_zoom = min_zoom;
        self.options.max_zoom = max_zoom;
        self
    }

    pub fn with_edge_padding(mut self, padding: EdgePadding) -> Self {
        self.options.fit.edge_padding = padding;
        self
    }

    pub fn with_animation(mut self, animated: bool) -> Self {
        self.options.fit.animated = animated;
        self
    }

    pub fn with_fit_options(mut self, fit: CameraFitOptions) -> Self {
        self.options.fit = fit;
        self
    }

    pub fn with_viewport_size(mut self, width: f64, height: f64) -> Self {
        self.size = Point::new(width, height);
        self
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Validates the options and attaches them to `surface`
    pub fn build<S: MapSurface>(self, surface: S) -> Result<MarkerSession<S>> {
        self.options.validate()?;
        Ok(MarkerSession::new(surface, self.options))
    }

    /// Builds a session on a [`HeadlessSurface`] sized by `with_viewport_size`
    pub fn build_headless(self) -> Result<MarkerSession<HeadlessSurface>> {
        let surface = HeadlessSurface::from_options(&self.options, self.size)?;
        Ok(MarkerSession::new(surface, self.options))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapError;

    #[test]
    fn test_builder_overrides() {
        let builder = SessionBuilder::new()
            .with_center_and_zoom(LatLng::new(51.5, -0.12), 9.0)
            .with_zoom_limits(3.0, 18.0)
            .with_edge_padding(EdgePadding::uniform(24.0))
            .with_animation(false);

        let options = builder.options();
        assert_eq!(options.initial_center, LatLng::new(51.5, -0.12));
        assert_eq!(options.initial_zoom, 9.0);
        assert_eq!(options.max_zoom, 18.0);
        assert_eq!(options.fit.edge_padding.top, 24.0);
        assert!(!options.fit.animated);
    }

    #[test]
    fn test_build_headless() {
        let session = SessionBuilder::new()
            .with_viewport_size(800.0, 600.0)
            .build_headless()
            .unwrap();

        assert!(!session.is_ready());
        assert_eq!(session.surface().viewport().size, Point::new(800.0, 600.0));
        assert_eq!(session.surface().camera().zoom, 11.0);
    }

    #[test]
    fn test_compact_profile() {
        let builder = SessionBuilder::with_profile(MapProfile::Compact);
        assert_eq!(builder.options().fit.edge_padding, EdgePadding::uniform(20.0));
    }

    #[test]
    fn test_invalid_options_fail_to_build() {
        let result = SessionBuilder::new()
            .with_zoom_limits(12.0, 4.0)
            .build_headless();
        assert!(matches!(result, Err(MapError::Config(_))));
    }
}
