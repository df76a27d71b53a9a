//! One-way publication of built registries.
//!
//! Writers finish strictly before any reader sees the snapshot: a
//! registry is fully built and validated, then swapped into the global
//! slot in one step. Hot reload is a fresh build followed by another
//! whole-snapshot swap; there is no partial-mutation API.

use crate::registry::Registry;
use std::sync::{Arc, RwLock};

static REGISTRY: RwLock<Option<Arc<Registry>>> = RwLock::new(None);

/// Publish a built registry, atomically replacing any previous snapshot.
/// Returns the shared handle so the caller can keep reading its own copy.
pub fn publish(registry: Registry) -> Arc<Registry> {
    let shared = Arc::new(registry);

    let mut slot = REGISTRY
        .write()
        .expect("registry slot poisoned while publishing");
    *slot = Some(Arc::clone(&shared));

    shared
}

/// The currently published snapshot, if any. Readers keep the `Arc` they
/// were handed; a later `publish` never mutates it under them.
#[must_use]
pub fn current() -> Option<Arc<Registry>> {
    REGISTRY
        .read()
        .expect("registry slot poisoned while reading")
        .clone()
}
