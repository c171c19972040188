//! # pinfit
//!
//! Tap-to-pin marker tracking and camera fitting for map screens.
//!
//! A map surface (whatever renders tiles and recognises gestures) reports
//! taps; the session turns each tap into a numbered marker, recomputes the
//! bounding box over every marker, and hands the surface a camera directive
//! framing them all with a fixed edge padding.
//!
//! Bounding boxes do not wrap around the antimeridian.

pub mod camera;
pub mod core;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod runtime;
pub mod surface;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::SessionBuilder,
    config::{CameraFitOptions, EdgePadding, MapOptions, MapProfile},
    geo::{LatLng, LatLngBounds, Point},
    session::MarkerSession,
    viewport::{CameraPosition, Viewport},
};

pub use camera::{bounding_box, CameraDirective, CameraFitEngine};

pub use layers::{
    marker::{Marker, MarkerId},
    store::MarkerStore,
};

pub use input::{events::MapEvent, events::SurfaceEvent, handler::EventManager};

pub use surface::{ChannelSurface, HeadlessSurface, MapSurface};

pub use runtime::SharedSession;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// A tap arrived before the map surface signalled readiness
    #[error("Map surface is not ready")]
    NotReady,

    /// A directive was required but there are no markers to frame
    #[error("No markers to compute bounds for")]
    EmptyBoundsRequest,

    #[error("Unknown marker: {0}")]
    UnknownMarker(MarkerId),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Session lock poisoned")]
    Poisoned,
}

/// Error type alias for convenience
pub type Error = MapError;
