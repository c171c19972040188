//! Prelude module for common pinfit types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use pinfit::prelude::*;`

pub use crate::core::{
    builder::SessionBuilder,
    config::{CameraFitOptions, EdgePadding, MapOptions, MapProfile},
    geo::{LatLng, LatLngBounds, Point},
    session::MarkerSession,
    viewport::{CameraPosition, Viewport},
};

pub use crate::camera::{bounding_box, CameraDirective, CameraFitEngine};

pub use crate::layers::{
    marker::{Marker, MarkerId},
    store::MarkerStore,
};

pub use crate::input::{EventManager, MapEvent, SurfaceEvent};

pub use crate::surface::{ChannelSurface, HeadlessSurface, MapSurface};

pub use crate::runtime::SharedSession;

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
