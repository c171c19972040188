//! Property-based tests for bounding-box computation.
//!
//! # Invariants tested
//!
//! - **Containment:** the box holds every marker coordinate.
//! - **Tightness:** each edge of the box touches some marker.
//! - **Idempotence:** recomputing without mutation gives the same box.
//! - **Order independence:** permuting insertion order gives the same box.

use pinfit::{bounding_box, CameraFitEngine, LatLng, Marker, MarkerStore};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = LatLng> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0).prop_map(|(lat, lng)| LatLng::new(lat, lng))
}

fn coordinates() -> impl Strategy<Value = Vec<LatLng>> {
    prop::collection::vec(coordinate(), 1..64)
}

fn store_with(coords: &[LatLng]) -> MarkerStore {
    let mut store = MarkerStore::new();
    for coord in coords {
        store.add_marker(*coord);
    }
    store
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn bounds_contain_every_marker(coords in coordinates()) {
        let store = store_with(&coords);
        let bounds = bounding_box(store.as_slice()).expect("non-empty store");

        for marker in store.iter() {
            let p = marker.position();
            prop_assert!(bounds.south_west.lat <= p.lat && p.lat <= bounds.north_east.lat);
            prop_assert!(bounds.south_west.lng <= p.lng && p.lng <= bounds.north_east.lng);
        }
    }

    #[test]
    fn bounds_are_tight(coords in coordinates()) {
        let store = store_with(&coords);
        let bounds = bounding_box(store.as_slice()).expect("non-empty store");

        prop_assert!(coords.iter().any(|c| c.lat == bounds.south_west.lat));
        prop_assert!(coords.iter().any(|c| c.lat == bounds.north_east.lat));
        prop_assert!(coords.iter().any(|c| c.lng == bounds.south_west.lng));
        prop_assert!(coords.iter().any(|c| c.lng == bounds.north_east.lng));
    }

    #[test]
    fn fit_is_idempotent(coords in coordinates()) {
        let store = store_with(&coords);
        let engine = CameraFitEngine::default();

        prop_assert_eq!(engine.fit(store.as_slice()), engine.fit(store.as_slice()));
    }

    #[test]
    fn bounds_ignore_insertion_order(
        (coords, shuffled) in coordinates()
            .prop_flat_map(|coords| (Just(coords.clone()), Just(coords).prop_shuffle()))
    ) {
        let original = store_with(&coords);
        let permuted = store_with(&shuffled);

        prop_assert_eq!(
            bounding_box(original.as_slice()),
            bounding_box(permuted.as_slice())
        );
    }

    #[test]
    fn single_marker_bounds_collapse(coord in coordinate()) {
        let marker = Marker::new(1, coord);
        let bounds = bounding_box(std::slice::from_ref(&marker)).expect("one marker");

        prop_assert_eq!(bounds.south_west, coord);
        prop_assert_eq!(bounds.north_east, coord);
    }
}

#[test]
fn empty_store_yields_no_directive() {
    let store = MarkerStore::new();
    assert!(bounding_box(store.as_slice()).is_none());
    assert!(CameraFitEngine::default().fit(store.as_slice()).is_none());
}
