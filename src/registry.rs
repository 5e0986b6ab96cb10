//! Concurrency-safe profile catalog indexed by model and by app name.
//!
//! Both indices live behind one `RwLock`, so a reader never sees a profile
//! present in one index but missing from the other. Lookups take the read
//! side and never block each other.

use crate::profile::{FormFactor, Generation, PowerSource, Profile, Series};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Indices {
    by_model: HashMap<String, Arc<Profile>>,
    by_app: HashMap<String, Arc<Profile>>,
}

impl Indices {
    fn insert(&mut self, profile: Profile) {
        let profile = Arc::new(profile);

        if let Some(previous) = self
            .by_model
            .insert(profile.model.clone(), Arc::clone(&profile))
        {
            tracing::debug!(model = %profile.model, "overwriting registered profile");
            // Drop the stale app entry if the replacement moved or lost its app.
            if let Some(old_app) = previous.app() {
                if profile.app() != Some(old_app)
                    && self
                        .by_app
                        .get(old_app)
                        .is_some_and(|p| p.model == previous.model)
                {
                    self.by_app.remove(old_app);
                }
            }
        }

        if let Some(app) = profile.app() {
            self.by_app.insert(app.to_string(), Arc::clone(&profile));
        }

        tracing::trace!(model = %profile.model, app = ?profile.app(), "registered profile");
    }
}

/// Profile catalog shared by everything that resolves devices.
///
/// Populated once at start-up (see [`crate::profile::build_default_registry`])
/// and read for the rest of the process lifetime.
#[derive(Debug, Default)]
pub struct Registry {
    inner: RwLock<Indices>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the maps half-updated
    // (each insert is a complete HashMap operation), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Indices> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Indices> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or overwrite by model; also indexed by app when it has one.
    pub fn register(&self, profile: Profile) {
        self.write().insert(profile);
    }

    /// Register a batch under a single write lock.
    pub fn register_all(&self, profiles: impl IntoIterator<Item = Profile>) {
        let mut indices = self.write();
        for profile in profiles {
            indices.insert(profile);
        }
    }

    pub fn get(&self, model: &str) -> Option<Arc<Profile>> {
        self.read().by_model.get(model).cloned()
    }

    pub fn get_by_app(&self, app: &str) -> Option<Arc<Profile>> {
        self.read().by_app.get(app).cloned()
    }

    /// Like [`Registry::get`], for callers where a missing model is a bug
    /// in the catalog rather than a property of device data.
    ///
    /// # Panics
    ///
    /// Panics if `model` is not registered.
    pub fn must_get(&self, model: &str) -> Arc<Profile> {
        match self.get(model) {
            Some(profile) => profile,
            None => panic!("profile not registered: {model}"),
        }
    }

    pub fn exists(&self, model: &str) -> bool {
        self.read().by_model.contains_key(model)
    }

    /// All profiles, in no particular order.
    pub fn list(&self) -> Vec<Arc<Profile>> {
        self.read().by_model.values().cloned().collect()
    }

    /// All profiles satisfying `predicate`, in no particular order.
    pub fn filter(&self, predicate: impl Fn(&Profile) -> bool) -> Vec<Arc<Profile>> {
        self.read()
            .by_model
            .values()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }

    pub fn list_by_generation(&self, generation: Generation) -> Vec<Arc<Profile>> {
        self.filter(|p| p.generation == generation)
    }

    pub fn list_by_series(&self, series: Series) -> Vec<Arc<Profile>> {
        self.filter(|p| p.series == series)
    }

    pub fn list_by_form_factor(&self, form_factor: FormFactor) -> Vec<Arc<Profile>> {
        self.filter(|p| p.form_factor == form_factor)
    }

    pub fn list_by_power_source(&self, power_source: PowerSource) -> Vec<Arc<Profile>> {
        self.filter(|p| p.power_source == power_source)
    }

    pub fn count(&self) -> usize {
        self.read().by_model.len()
    }

    /// Case-insensitive substring match on model, name or app.
    pub fn search(&self, query: &str) -> Vec<Arc<Profile>> {
        let query = query.to_lowercase();
        self.filter(|p| {
            p.model.to_lowercase().contains(&query)
                || p.name.to_lowercase().contains(&query)
                || p.app().is_some_and(|a| a.to_lowercase().contains(&query))
        })
    }

    /// Remove every profile from both indices. Intended for resetting state
    /// between tests; detection never calls it.
    pub fn clear(&self) {
        let mut indices = self.write();
        indices.by_model.clear();
        indices.by_app.clear();
        tracing::debug!("cleared profile registry");
    }
}
