use crate::{
    camera::{CameraDirective, CameraFitEngine},
    core::{
        config::MapOptions,
        geo::{LatLng, Point},
    },
    input::{EventManager, MapEvent, SurfaceEvent},
    layers::{
        marker::{Marker, MarkerId},
        store::MarkerStore,
    },
    surface::MapSurface,
    MapError, Result,
};

/// Tap-to-pin map screen logic: readiness gate, marker store and camera fit
/// wired to a single [`MapSurface`].
///
/// Every call runs to completion (store mutation, bounds recompute and
/// camera application) before returning, so one `&mut` borrow is one atomic
/// step.
pub struct MarkerSession<S: MapSurface> {
    surface: S,
    store: MarkerStore,
    engine: CameraFitEngine,
    event_manager: EventManager,
    options: MapOptions,
    ready: bool,
}

impl<S: MapSurface> MarkerSession<S> {
    pub fn new(surface: S, options: MapOptions) -> Self {
        Self {
            surface,
            store: MarkerStore::new(),
            engine: CameraFitEngine::new(options.fit),
            event_manager: EventManager::new(),
            options,
            ready: false,
        }
    }

    /// Marks the surface as loaded. Repeated signals are harmless.
    pub fn on_ready(&mut self) {
        if !self.ready {
            self.ready = true;
            log::info!("map surface ready");
            self.event_manager.emit(MapEvent::Ready);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Handles a tap in container pixels.
    ///
    /// Before the surface is ready the tap is dropped and `NotReady` is
    /// returned. Otherwise a marker is placed at the tapped coordinate and
    /// the camera refitted around every marker.
    pub fn handle_tap(&mut self, screen_point: Point) -> Result<CameraDirective> {
        let coordinate = self.surface.tap_to_coordinate(screen_point);
        log::debug!(
            "map tapped at coordinate: {}, {}",
            coordinate.lat,
            coordinate.lng
        );

        if !self.ready {
            log::warn!("map is not loaded yet, dropping tap at {:?}", screen_point);
            self.event_manager.emit(MapEvent::TapDropped {
                position: screen_point,
            });
            return Err(MapError::NotReady);
        }

        self.place(coordinate)
    }

    /// Places a marker at a known coordinate, bypassing tap projection.
    /// The readiness gate still applies.
    pub fn add_marker_at(&mut self, coordinate: LatLng) -> Result<CameraDirective> {
        if !self.ready {
            log::warn!("map is not loaded yet, ignoring marker at {:?}", coordinate);
            return Err(MapError::NotReady);
        }
        self.place(coordinate)
    }

    fn place(&mut self, coordinate: LatLng) -> Result<CameraDirective> {
        let marker = self.store.add_marker(coordinate);
        log::info!(
            "placed {} at {}, {}",
            marker.label(),
            coordinate.lat,
            coordinate.lng
        );
        self.event_manager.emit(MapEvent::MarkerAdded {
            marker,
            count: self.store.count(),
        });

        // The store was just appended to, so a directive always exists here.
        self.refit().ok_or(MapError::EmptyBoundsRequest)
    }

    /// Recomputes the directive over all markers and applies it.
    /// Returns `None`, leaving the camera untouched, when no markers exist.
    pub fn refit(&mut self) -> Option<CameraDirective> {
        let directive = self.engine.fit(self.store.as_slice())?;
        self.surface.apply_camera(&directive);
        self.event_manager.emit(MapEvent::CameraFitted { directive });
        Some(directive)
    }

    /// Directive for the current markers without touching the surface
    pub fn current_directive(&self) -> Option<CameraDirective> {
        self.engine.fit(self.store.as_slice())
    }

    /// Handles the user tapping an existing marker
    pub fn select_marker(&mut self, id: MarkerId) -> Result<&Marker> {
        let marker = self.store.get(id).ok_or(MapError::UnknownMarker(id))?;
        log::info!("marker tapped: {}", marker.label());
        self.event_manager.emit(MapEvent::MarkerSelected {
            id,
            label: marker.label().to_string(),
        });
        Ok(marker)
    }

    /// Routes a surface event to the matching handler.
    ///
    /// Taps dropped by the readiness gate are only logged, so this returns
    /// `Ok(None)` for them.
    pub fn dispatch(&mut self, event: SurfaceEvent) -> Result<Option<CameraDirective>> {
        match event {
            SurfaceEvent::MapLoaded | SurfaceEvent::StyleLoaded => {
                self.on_ready();
                Ok(None)
            }
            SurfaceEvent::Tap { position } => match self.handle_tap(position) {
                Ok(directive) => Ok(Some(directive)),
                Err(MapError::NotReady) => Ok(None),
                Err(e) => Err(e),
            },
            SurfaceEvent::MarkerSelected { id } => {
                self.select_marker(id)?;
                Ok(None)
            }
        }
    }

    /// Register a listener for `MapEvent::event_type` names
    pub fn on<F>(&mut self, event_type: &str, callback: F)
    where
        F: Fn(&MapEvent) + Send + Sync + 'static,
    {
        self.event_manager.on(event_type, callback);
    }

    pub fn process_events(&mut self) -> Vec<MapEvent> {
        self.event_manager.process_events()
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn all_markers(&self) -> Vec<Marker> {
        self.store.all_markers()
    }

    pub fn store(&self) -> &MarkerStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
