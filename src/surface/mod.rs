//! The boundary with whatever actually draws the map
//!
//! A [`MapSurface`] turns screen taps into coordinates and carries out camera
//! directives. The session never does projection math itself. Two surfaces
//! ship with the crate: a headless one backed by a Web Mercator [`Viewport`],
//! and one that forwards directives to another thread over a channel.

use crate::{
    camera::CameraDirective,
    core::{
        config::MapOptions,
        constants::{DEFAULT_CENTER, DEFAULT_VIEWPORT_SIZE, DEFAULT_ZOOM},
        geo::{LatLng, Point},
        viewport::{CameraPosition, Viewport},
    },
    Result,
};
use crossbeam_channel::{Receiver, Sender};

pub trait MapSurface {
    /// Converts a container-relative tap into a geographic coordinate
    fn tap_to_coordinate(&self, screen_point: Point) -> LatLng;

    /// Moves the camera so the directive's bounds plus padding are visible
    fn apply_camera(&mut self, directive: &CameraDirective);
}

impl<S: MapSurface + ?Sized> MapSurface for Box<S> {
    fn tap_to_coordinate(&self, screen_point: Point) -> LatLng {
        (**self).tap_to_coordinate(screen_point)
    }

    fn apply_camera(&mut self, directive: &CameraDirective) {
        (**self).apply_camera(directive)
    }
}

fn viewport_from_options(options: &MapOptions, size: Point) -> Result<Viewport> {
    let mut viewport = Viewport::new(options.initial_center, options.initial_zoom, size);
    viewport.set_zoom_limits(options.min_zoom, options.max_zoom)?;
    viewport.set_zoom(options.initial_zoom);
    Ok(viewport)
}

/// Map surface without any rendering, driven entirely by a [`Viewport`]
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    viewport: Viewport,
    /// Zoom used when a directive targets a single point
    fallback_zoom: f64,
    history: Vec<CameraPosition>,
}

impl HeadlessSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            fallback_zoom: DEFAULT_ZOOM,
            history: Vec::new(),
        }
    }

    /// Validates `options` and builds a surface showing the initial camera.
    /// The initial zoom doubles as the zoom for single-point directives.
    pub fn from_options(options: &MapOptions, size: Point) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            viewport: viewport_from_options(options, size)?,
            fallback_zoom: options.clamped_initial_zoom(),
            history: Vec::new(),
        })
    }

    pub fn with_fallback_zoom(mut self, zoom: f64) -> Self {
        self.fallback_zoom = zoom;
        self
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn camera(&self) -> CameraPosition {
        self.viewport.camera()
    }

    /// Every camera applied so far, oldest first
    pub fn history(&self) -> &[CameraPosition] {
        &self.history
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        let size = Point::new(DEFAULT_VIEWPORT_SIZE.0, DEFAULT_VIEWPORT_SIZE.1);
        let center = LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1);
        Self::new(Viewport::new(center, DEFAULT_ZOOM, size))
    }
}

impl MapSurface for HeadlessSurface {
    fn tap_to_coordinate(&self, screen_point: Point) -> LatLng {
        self.viewport.pixel_to_lat_lng(&screen_point)
    }

    fn apply_camera(&mut self, directive: &CameraDirective) {
        let camera = self.viewport.camera_for_bounds(
            &directive.bounds,
            &directive.edge_padding,
            self.fallback_zoom,
        );
        self.viewport.apply(camera);
        self.history.push(self.viewport.camera());
    }
}

/// Projects taps locally and ships directives to a consumer on another
/// thread, typically the render loop.
#[derive(Debug, Clone)]
pub struct ChannelSurface {
    viewport: Viewport,
    sender: Sender<CameraDirective>,
}

impl ChannelSurface {
    pub fn new(viewport: Viewport) -> (Self, Receiver<CameraDirective>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self { viewport, sender }, receiver)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Keeps tap projection in sync with what the consumer is showing
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

impl MapSurface for ChannelSurface {
    fn tap_to_coordinate(&self, screen_point: Point) -> LatLng {
        self.viewport.pixel_to_lat_lng(&screen_point)
    }

    fn apply_camera(&mut self, directive: &CameraDirective) {
        if self.sender.send(*directive).is_err() {
            log::warn!("camera directive dropped: receiver disconnected");
        }
    }
}
