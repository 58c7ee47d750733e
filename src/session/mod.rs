//! Session state: the current credential and its persistence.

mod credential;
mod storage;

pub use credential::Credential;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};

use std::sync::Arc;

use parking_lot::RwLock;

use crate::flavor::Flavor;

/// Process-wide holder of the current credential.
///
/// The in-memory value is the source of truth after bootstrap: requests and
/// navigations consult it directly, and storage is only touched by
/// [`SessionStore::load`], [`SessionStore::save`] and [`SessionStore::clear`].
/// Cloning is cheap and all clones share the same state.
#[derive(Clone)]
pub struct SessionStore {
    flavor: Flavor,
    storage: Arc<dyn Storage>,
    current: Arc<RwLock<Option<Credential>>>,
}

impl SessionStore {
    pub fn new(flavor: Flavor, storage: Arc<dyn Storage>) -> Self {
        Self {
            flavor,
            storage,
            current: Arc::new(RwLock::new(None)),
        }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Re-read the persisted credential into memory.
    ///
    /// Called once at application bootstrap. Corrupt or wrong-flavor data is
    /// treated as absent and never produces an error.
    pub fn load(&self) -> Option<Credential> {
        let loaded = self
            .storage
            .get(self.flavor.storage_key())
            .and_then(|raw| Credential::decode(self.flavor, &raw));
        *self.current.write() = loaded.clone();
        loaded
    }

    /// The in-memory credential.
    pub fn current(&self) -> Option<Credential> {
        self.current.read().clone()
    }

    pub fn is_present(&self) -> bool {
        self.current.read().is_some()
    }

    /// Install and persist a credential.
    ///
    /// Total for any credential of the store's flavor; storage failures are
    /// logged and swallowed. A credential of the other flavor is rejected
    /// without touching the store, keeping the one-shape-per-app invariant.
    pub fn save(&self, credential: Credential) {
        if credential.flavor() != self.flavor {
            tracing::warn!(
                store = ?self.flavor,
                credential = ?credential.flavor(),
                "refusing to save credential of mismatched flavor"
            );
            return;
        }
        let encoded = credential.encode();
        *self.current.write() = Some(credential);
        if let Err(err) = self.storage.set(self.flavor.storage_key(), &encoded) {
            tracing::warn!(%err, "failed to persist credential");
        }
    }

    /// Remove the credential from memory and storage.
    ///
    /// Idempotent: clearing an already-empty store does nothing and reports
    /// `false`, so callers reacting to an expiry can act exactly once.
    pub fn clear(&self) -> bool {
        let had = self.current.write().take().is_some();
        if had {
            if let Err(err) = self.storage.remove(self.flavor.storage_key()) {
                tracing::warn!(%err, "failed to remove persisted credential");
            }
        }
        had
    }
}
