use crate::{
    camera::CameraDirective,
    core::geo::Point,
    layers::marker::{Marker, MarkerId},
};
use serde::{Deserialize, Serialize};

/// Events a map surface dispatches into the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceEvent {
    /// The base map finished loading
    MapLoaded,
    /// The style finished loading; counts as ready just like `MapLoaded`
    StyleLoaded,
    /// Single tap on the map, in container pixels
    Tap { position: Point },
    /// The user tapped an existing marker
    MarkerSelected { id: MarkerId },
}

/// Notifications emitted by the session after it handles an event
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// The surface signalled readiness for the first time
    Ready,
    /// A marker was placed; `count` is the store size afterwards
    MarkerAdded { marker: Marker, count: usize },
    /// A camera directive was handed to the surface
    CameraFitted { directive: CameraDirective },
    /// A tap arrived before the surface was ready and was discarded
    TapDropped { position: Point },
    MarkerSelected { id: MarkerId, label: String },
}

impl MapEvent {
    /// Name used when registering listeners
    pub fn event_type(&self) -> &'static str {
        match self {
            MapEvent::Ready => "ready",
            MapEvent::MarkerAdded { .. } => "markeradd",
            MapEvent::CameraFitted { .. } => "camerafit",
            MapEvent::TapDropped { .. } => "tapdropped",
            MapEvent::MarkerSelected { .. } => "markerselect",
        }
    }
}

impl SurfaceEvent {
    /// Gets the screen position associated with this event, if any
    pub fn position(&self) -> Option<Point> {
        match self {
            SurfaceEvent::Tap { position } => Some(*position),
            _ => None,
        }
    }

    pub fn is_readiness_signal(&self) -> bool {
        matches!(self, SurfaceEvent::MapLoaded | SurfaceEvent::StyleLoaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_event_position() {
        let tap = SurfaceEvent::Tap {
            position: Point::new(100.0, 200.0),
        };
        assert_eq!(tap.position(), Some(Point::new(100.0, 200.0)));
        assert_eq!(SurfaceEvent::MapLoaded.position(), None);
    }

    #[test]
    fn test_readiness_signals() {
        assert!(SurfaceEvent::MapLoaded.is_readiness_signal());
        assert!(SurfaceEvent::StyleLoaded.is_readiness_signal());
        assert!(!SurfaceEvent::MarkerSelected { id: 1 }.is_readiness_signal());
    }

    #[test]
    fn test_surface_event_json() {
        let event: SurfaceEvent =
            serde_json::from_str(r#"{"type": "tap", "position": {"x": 10.0, "y": 20.0}}"#)
                .unwrap();
        assert_eq!(
            event,
            SurfaceEvent::Tap {
                position: Point::new(10.0, 20.0)
            }
        );

        let loaded: SurfaceEvent = serde_json::from_str(r#"{"type": "style_loaded"}"#).unwrap();
        assert_eq!(loaded, SurfaceEvent::StyleLoaded);
    }
}
