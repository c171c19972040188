//! Engine-wide defaults, kept in one place so the magic numbers are easy to tweak.

/// Default square tile size in pixels, used by the Web Mercator projection.
pub const TILE_SIZE: f64 = 256.0;

/// Padding (pixels) kept between fitted markers and each viewport edge.
pub const DEFAULT_EDGE_PADDING: f64 = 50.0;

/// Initial camera center (lower Manhattan).
pub const DEFAULT_CENTER: (f64, f64) = (40.7342, -73.9911);

/// Initial zoom, also used when fitting a single marker.
pub const DEFAULT_ZOOM: f64 = 11.0;

pub const DEFAULT_MIN_ZOOM: f64 = 7.0;
pub const DEFAULT_MAX_ZOOM: f64 = 15.0;

/// Viewport size assumed by headless surfaces when none is given.
pub const DEFAULT_VIEWPORT_SIZE: (f64, f64) = (390.0, 844.0);

/// Title prefix for markers; the marker id is appended.
pub const MARKER_LABEL_PREFIX: &str = "Marker";
