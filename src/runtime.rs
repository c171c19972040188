//! Sharing a session across threads
//!
//! The session itself is single-threaded. When taps can arrive from more
//! than one thread, [`SharedSession`] serialises them behind one mutex, so
//! placing a marker and refitting the camera can never interleave with
//! another tap.

use crate::{
    camera::CameraDirective,
    core::{
        geo::{LatLng, Point},
        session::MarkerSession,
    },
    input::SurfaceEvent,
    layers::marker::Marker,
    surface::MapSurface,
    MapError, Result,
};
use std::sync::{Arc, Mutex, MutexGuard};

pub struct SharedSession<S: MapSurface> {
    inner: Arc<Mutex<MarkerSession<S>>>,
}

impl<S: MapSurface> Clone for SharedSession<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: MapSurface> SharedSession<S> {
    pub fn new(session: MarkerSession<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, MarkerSession<S>>> {
        self.inner.lock().map_err(|_| MapError::Poisoned)
    }

    pub fn on_ready(&self) -> Result<()> {
        self.lock()?.on_ready();
        Ok(())
    }

    pub fn handle_tap(&self, screen_point: Point) -> Result<CameraDirective> {
        self.lock()?.handle_tap(screen_point)
    }

    pub fn add_marker_at(&self, coordinate: LatLng) -> Result<CameraDirective> {
        self.lock()?.add_marker_at(coordinate)
    }

    pub fn dispatch(&self, event: SurfaceEvent) -> Result<Option<CameraDirective>> {
        self.lock()?.dispatch(event)
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.lock()?.count())
    }

    pub fn all_markers(&self) -> Result<Vec<Marker>> {
        Ok(self.lock()?.all_markers())
    }

    /// Runs `f` with exclusive access to the session
    pub fn with_session<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut MarkerSession<S>) -> R,
    {
        let mut session = self.lock()?;
        Ok(f(&mut *session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::config::MapOptions, surface::ChannelSurface, Viewport};
    use std::thread;

    #[test]
    fn test_concurrent_taps_keep_ids_dense() {
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 11.0, Point::new(400.0, 400.0));
        let (surface, receiver) = ChannelSurface::new(viewport);
        let shared = SharedSession::new(MarkerSession::new(surface, MapOptions::default()));
        shared.on_ready().unwrap();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        let point = Point::new(f64::from(t) * 10.0, f64::from(i) * 10.0);
                        shared.handle_tap(point).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let markers = shared.all_markers().unwrap();
        assert_eq!(markers.len(), 100);
        for (index, marker) in markers.iter().enumerate() {
            assert_eq!(marker.id(), index as u64 + 1);
        }

        // Each directive covers every marker placed up to that point.
        let directives: Vec<_> = receiver.try_iter().collect();
        assert_eq!(directives.len(), 100);
        for (index, directive) in directives.iter().enumerate() {
            for marker in &markers[..=index] {
                assert!(directive.bounds.contains(&marker.position()));
            }
        }
    }

    #[test]
    fn test_shared_session_respects_readiness() {
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 11.0, Point::new(400.0, 400.0));
        let (surface, _receiver) = ChannelSurface::new(viewport);
        let shared = SharedSession::new(MarkerSession::new(surface, MapOptions::default()));

        assert!(matches!(
            shared.add_marker_at(LatLng::new(1.0, 1.0)),
            Err(MapError::NotReady)
        ));
        assert_eq!(shared.count().unwrap(), 0);
        assert!(!shared.with_session(|s| s.is_ready()).unwrap());
    }

    #[test]
    fn test_panicking_holder_poisons_the_session() {
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 11.0, Point::new(400.0, 400.0));
        let (surface, _receiver) = ChannelSurface::new(viewport);
        let shared = SharedSession::new(MarkerSession::new(surface, MapOptions::default()));

        let holder = shared.clone();
        let outcome =
            thread::spawn(move || holder.with_session(|_| panic!("surface callback failed"))).join();
        assert!(outcome.is_err());

        assert!(matches!(shared.count(), Err(MapError::Poisoned)));
        assert!(matches!(
            shared.handle_tap(Point::new(1.0, 1.0)),
            Err(MapError::Poisoned)
        ));
    }
}
