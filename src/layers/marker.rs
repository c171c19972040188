use crate::core::{
    constants::MARKER_LABEL_PREFIX,
    geo::{LatLng, LatLngBounds},
};
use serde::{Deserialize, Serialize};

/// Identifier of a placed marker; sequential, starting at 1
pub type MarkerId = u64;

/// A user-placed point of interest. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    id: MarkerId,
    position: LatLng,
    label: String,
    subtitle: String,
}

impl Marker {
    pub fn new(id: MarkerId, position: LatLng) -> Self {
        Self {
            id,
            position,
            label: format!("{MARKER_LABEL_PREFIX} {id}"),
            subtitle: format!("This is marker number {id}"),
        }
    }

    pub fn id(&self) -> MarkerId {
        self.id
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    /// Callout title, e.g. "Marker 3"
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Callout body text
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn bounds(&self) -> LatLngBounds {
        LatLngBounds::from_point(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_text_derives_from_id() {
        let marker = Marker::new(7, LatLng::new(1.0, 2.0));
        assert_eq!(marker.id(), 7);
        assert_eq!(marker.label(), "Marker 7");
        assert_eq!(marker.subtitle(), "This is marker number 7");
        assert_eq!(marker.position(), LatLng::new(1.0, 2.0));
        assert!(marker.bounds().is_degenerate());
    }
}
