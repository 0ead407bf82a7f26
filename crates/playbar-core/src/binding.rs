//! Listener bookkeeping.
//!
//! Every attached listener is stored under a structural `(event, target)`
//! key. Removing an entry drops its listener guard, which detaches the
//! callback, so emptying the registry is the same thing as unbinding.

use std::collections::HashMap;

use thiserror::Error;

use crate::events::EventKind;

/// Opaque identity of a bind target.
///
/// Issued by an [`IdSource`] that never repeats, so keys from one binding
/// generation cannot alias keys from the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(u64);

/// Monotonic source of [`HandleId`]s.
#[derive(Debug, Default)]
pub struct IdSource {
    next: u64,
}

impl IdSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> HandleId {
        let id = HandleId(self.next);
        self.next += 1;
        id
    }
}

/// Composite registry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BindingKey {
    pub event: EventKind,
    pub target: HandleId,
}

impl BindingKey {
    pub fn new(event: impl Into<EventKind>, target: HandleId) -> Self {
        Self {
            event: event.into(),
            target,
        }
    }
}

impl std::fmt::Display for BindingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.event.as_str(), self.target.0)
    }
}

/// Errors from registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BindingError {
    /// The key already has a listener. Binding it again would double-fire.
    #[error("listener already bound for {0}")]
    Duplicate(BindingKey),
}

/// Map from binding key to the listener guard that keeps it attached.
#[derive(Debug)]
pub struct BindingRegistry<L> {
    entries: HashMap<BindingKey, L>,
}

impl<L> Default for BindingRegistry<L> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<L> BindingRegistry<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach through `attach` only if the key is free. A key holds exactly
    /// one listener.
    ///
    /// The key is checked before `attach` runs so a duplicate never reaches
    /// the host at all.
    pub fn bind<E>(
        &mut self,
        key: BindingKey,
        attach: impl FnOnce() -> Result<L, E>,
    ) -> Result<(), E>
    where
        E: From<BindingError>,
    {
        if self.entries.contains_key(&key) {
            return Err(BindingError::Duplicate(key).into());
        }
        let listener = attach()?;
        self.entries.insert(key, listener);
        Ok(())
    }

    /// Drop every listener and clear the registry. Safe on an empty registry.
    ///
    /// Returns how many listeners were removed.
    pub fn unbind_all(&mut self) -> usize {
        let count = self.entries.len();
        // Drain so every guard is dropped before this returns.
        for (key, listener) in self.entries.drain() {
            tracing::trace!(%key, "unbind");
            drop(listener);
        }
        count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
