use super::*;

/// Shared slot holding the current [`Metadata`] snapshot.
///
/// Readers take a cheap `Arc` clone of whatever snapshot is current; writers
/// swap in a complete new snapshot. A reader therefore sees either the old or
/// the new snapshot, never a half-filled one. Clones of the handle share the
/// same slot, so a host can hand one to a background refresh task.
#[derive(Debug, Clone, Default)]
pub struct MetadataHandle {
    slot: Arc<RwLock<Arc<Metadata>>>,
}

impl MetadataHandle {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Arc::new(metadata))),
        }
    }

    /// The snapshot current at the time of the call.
    pub fn load(&self) -> Arc<Metadata> {
        // A poisoned lock still holds a whole snapshot: writers only ever
        // assign a finished `Arc`.
        let guard = self.slot.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    /// Replace the current snapshot.
    pub fn replace(&self, metadata: Metadata) {
        let next = Arc::new(metadata);
        let mut guard = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *guard = next;
    }
}
