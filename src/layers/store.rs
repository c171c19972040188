use crate::{
    core::geo::LatLng,
    layers::marker::{Marker, MarkerId},
};

/// Append-only, insertion-ordered collection of placed markers
#[derive(Debug, Clone, Default)]
pub struct MarkerStore {
    markers: Vec<Marker>,
    /// Number of markers handed out so far; the next id is `counter + 1`
    counter: MarkerId,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a new marker at `position` and returns it.
    ///
    /// The coordinate is stored as given; range checks are the caller's job.
    pub fn add_marker(&mut self, position: LatLng) -> Marker {
        let marker = Marker::new(self.counter + 1, position);
        self.markers.push(marker.clone());
        self.counter += 1;
        marker
    }

    /// Snapshot of all markers in insertion order
    pub fn all_markers(&self) -> Vec<Marker> {
        self.markers.clone()
    }

    pub fn count(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        // Ids are dense and start at 1.
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.markers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    /// Borrowed view over the markers, for bounds computation
    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }

    pub fn positions(&self) -> Vec<LatLng> {
        self.markers.iter().map(Marker::position).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_marker_assigns_sequential_ids() {
        let mut store = MarkerStore::new();
        assert!(store.is_empty());

        let first = store.add_marker(LatLng::new(40.70, -74.00));
        store.add_marker(LatLng::new(40.80, -73.90));
        let third = store.add_marker(LatLng::new(40.75, -74.05));

        assert_eq!(first.id(), 1);
        assert_eq!(store.count(), 3);
        assert_eq!(third.id(), 3);
        assert_eq!(third.label(), "Marker 3");
    }

    #[test]
    fn test_all_markers_is_a_snapshot() {
        let mut store = MarkerStore::new();
        store.add_marker(LatLng::new(1.0, 1.0));

        let snapshot = store.all_markers();
        store.add_marker(LatLng::new(2.0, 2.0));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.all_markers().len(), 2);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut store = MarkerStore::new();
        let coords = [
            LatLng::new(3.0, 3.0),
            LatLng::new(1.0, 1.0),
            LatLng::new(2.0, 2.0),
        ];
        for coord in coords {
            store.add_marker(coord);
        }

        assert_eq!(store.positions(), coords.to_vec());
        let ids: Vec<_> = store.iter().map(Marker::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_get_by_id() {
        let mut store = MarkerStore::new();
        store.add_marker(LatLng::new(1.0, 1.0));
        store.add_marker(LatLng::new(2.0, 2.0));

        assert_eq!(store.get(2).map(Marker::label), Some("Marker 2"));
        assert!(store.get(0).is_none());
        assert!(store.get(3).is_none());
    }

    #[test]
    fn test_out_of_range_input_is_stored_verbatim() {
        let mut store = MarkerStore::new();
        let marker = store.add_marker(LatLng::new(95.0, 200.0));
        assert_eq!(marker.position(), LatLng::new(95.0, 200.0));
    }
}
