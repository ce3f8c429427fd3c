//! Explicit owner of the loaded surfaces and their ripple state.
//!
//! Both the locator (writer) and the frame evaluator (reader) receive the
//! registry by reference; nothing about the active ripple lives in globals.

use crate::field::{FieldSampler, RippleCenter, RippleState};
use crate::params::RippleParameters;
use crate::surface::{Aabb, InteractiveSurface, SurfaceId};
use fnv::FnvHashMap;

#[derive(Clone, Debug)]
pub struct SurfaceEntry {
    pub surface: InteractiveSurface,
    pub params: RippleParameters,
    pub state: RippleState,
}

#[derive(Clone, Debug, Default)]
pub struct SurfaceRegistry {
    entries: Vec<SurfaceEntry>,
    index: FnvHashMap<SurfaceId, usize>,
    defaults: RippleParameters,
    clock: f32,
    generation: u64,
}

impl SurfaceRegistry {
    pub fn new(defaults: RippleParameters) -> Self {
        Self {
            defaults,
            ..Default::default()
        }
    }

    /// Swap in a freshly loaded asset. Old surfaces and states are dropped in
    /// one step and every new surface starts IDLE on the session clock.
    ///
    /// Later duplicates of an id are dropped.
    pub fn replace_surfaces(&mut self, surfaces: Vec<InteractiveSurface>) {
        let mut entries = Vec::with_capacity(surfaces.len());
        let mut index = FnvHashMap::default();
        for surface in surfaces {
            if index.contains_key(&surface.id) {
                log::warn!("[registry] duplicate {} ignored", surface.id);
                continue;
            }
            index.insert(surface.id, entries.len());
            entries.push(SurfaceEntry {
                surface,
                params: self.defaults,
                state: RippleState::starting_at(self.clock),
            });
        }
        self.entries = entries;
        self.index = index;
        self.generation += 1;
        log::info!(
            "[registry] generation {} with {} surfaces ({} interactive)",
            self.generation,
            self.entries.len(),
            self.entries.iter().filter(|e| e.surface.is_interactive()).count()
        );
    }

    pub fn clear(&mut self) {
        self.replace_surfaces(Vec::new());
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn clock(&self) -> f32 {
        self.clock
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SurfaceEntry] {
        &self.entries
    }

    pub fn get(&self, id: SurfaceId) -> Option<&SurfaceEntry> {
        self.index.get(&id).map(|&i| &self.entries[i])
    }

    pub fn state(&self, id: SurfaceId) -> Option<&RippleState> {
        self.get(id).map(|e| &e.state)
    }

    /// Advance every surface's clock by one frame.
    pub fn advance(&mut self, dt_sec: f32) {
        if !(dt_sec.is_finite() && dt_sec > 0.0) {
            return;
        }
        self.clock += dt_sec;
        for e in &mut self.entries {
            e.state.advance(dt_sec);
        }
    }

    pub fn defaults(&self) -> RippleParameters {
        self.defaults
    }

    /// Replace one surface's parameters wholesale.
    pub fn set_parameters(&mut self, id: SurfaceId, params: RippleParameters) -> bool {
        if let Err(e) = params.validate() {
            log::warn!("[registry] {} parameters will render nothing: {}", id, e);
        }
        match self.index.get(&id) {
            Some(&i) => {
                self.entries[i].params = params;
                true
            }
            None => false,
        }
    }

    /// Replace the defaults and every surface's parameters.
    pub fn set_all_parameters(&mut self, params: RippleParameters) {
        if let Err(e) = params.validate() {
            log::warn!("[registry] parameters will render nothing: {}", e);
        }
        self.defaults = params;
        for e in &mut self.entries {
            e.params = params;
        }
    }

    /// Explicit ACTIVE→IDLE for one surface.
    pub fn reset(&mut self, id: SurfaceId) -> bool {
        match self.index.get(&id) {
            Some(&i) => self.entries[i].state.clear(),
            None => false,
        }
    }

    pub fn reset_all(&mut self) {
        for e in &mut self.entries {
            e.state.clear();
        }
    }

    /// Make `id` the only active surface. Unknown ids clear everything.
    pub(crate) fn activate_exclusive(&mut self, id: SurfaceId, center: RippleCenter) {
        for e in &mut self.entries {
            if e.surface.id == id {
                if e.state.activate(center) {
                    log::debug!("[ripple] {} idle -> active", id);
                }
            } else if e.state.clear() {
                log::debug!("[ripple] {} active -> idle", e.surface.id);
            }
        }
    }

    pub(crate) fn clear_all_centers(&mut self) {
        for e in &mut self.entries {
            if e.state.clear() {
                log::debug!("[ripple] {} active -> idle", e.surface.id);
            }
        }
    }

    /// The surface currently owning the ripple, if any.
    pub fn active_surface(&self) -> Option<SurfaceId> {
        self.entries
            .iter()
            .find(|e| e.state.active_center().is_some())
            .map(|e| e.surface.id)
    }

    pub fn sampler(&self, id: SurfaceId) -> Option<FieldSampler> {
        self.get(id).map(|e| FieldSampler::new(e.params, &e.state))
    }

    /// Per-frame mapping from surface to its field, for the rasterizer.
    pub fn samplers(&self) -> impl Iterator<Item = (SurfaceId, FieldSampler)> + '_ {
        self.entries
            .iter()
            .map(|e| (e.surface.id, FieldSampler::new(e.params, &e.state)))
    }

    /// Union of all surface bounds, for fitting the camera.
    pub fn bounds(&self) -> Option<Aabb> {
        self.entries
            .iter()
            .filter_map(|e| e.surface.bounds())
            .reduce(|a, b| a.union(&b))
    }
}
