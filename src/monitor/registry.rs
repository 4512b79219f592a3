/// The registry of discovered monitors: stable identity -> control handle.
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::errors::MonitorError;

/// Mapping from device identity to the control handle of one physical
/// monitor. Keys are unique; iteration and [`Registry::list`] follow the
/// key order of the underlying `BTreeMap`, so listing is lexicographic and
/// deterministic regardless of discovery order.
///
/// The registry owns its handles. Dropping the registry (or calling
/// [`Registry::dispose`]) releases them; `H` is expected to release its OS
/// handle in its own `Drop`.
#[derive(Debug)]
pub struct Registry<H> {
    entries: BTreeMap<String, H>,
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Registry<H> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert a handle under `identity`. The first binding wins: when the
    /// identity is already present this returns `false` and the incoming
    /// handle is dropped (and thereby released).
    pub fn insert(&mut self, identity: String, handle: H) -> bool {
        match self.entries.entry(identity) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(handle);
                true
            }
        }
    }

    /// Number of monitors in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no monitors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The identities of all monitors, in lexicographic order.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Iterate over `(identity, handle)` pairs in lexicographic order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &H)> {
        self.entries.iter().map(|(id, h)| (id.as_str(), h))
    }

    /// Split off a new registry restricted to `identity`, moving its handle
    /// out of `self`. When the identity is absent, `self` is left unmodified.
    ///
    /// # Errors
    ///
    /// Returns `MonitorError::MonitorNotFound` when no entry matches.
    pub fn filter(&mut self, identity: &str) -> Result<Self, MonitorError> {
        match self.entries.remove(identity) {
            Some(handle) => {
                let mut filtered = Self::new();
                filtered.insert(identity.to_owned(), handle);
                Ok(filtered)
            }
            None => Err(MonitorError::MonitorNotFound {
                identity: identity.to_owned(),
            }),
        }
    }

    /// Apply `op` to every entry, collecting per-entry failures without
    /// short-circuiting. One broken monitor must not abort the operation on
    /// the rest.
    #[must_use]
    pub fn for_each<F>(&self, mut op: F) -> Vec<(String, MonitorError)>
    where
        F: FnMut(&str, &H) -> Result<(), MonitorError>,
    {
        let mut failures = Vec::new();
        for (identity, handle) in &self.entries {
            if let Err(err) = op(identity, handle) {
                failures.push((identity.clone(), err));
            }
        }
        failures
    }

    /// Release every held handle. Idempotent: a second call finds an empty
    /// registry and releases nothing. Dropping the registry has the same
    /// effect; this exists for callers that want the release to happen at a
    /// specific point.
    pub fn dispose(&mut self) {
        self.entries.clear();
    }
}
