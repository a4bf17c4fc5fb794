use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Per-event registry of mutating lifecycle operations currently in flight.
///
/// Shared across workers through the app state. A second operation against
/// the same event id is refused while the first guard is alive, so duplicate
/// concurrent submissions conflict instead of racing.
#[derive(Clone, Default)]
pub struct InFlightRegistry {
    ops: Arc<Mutex<HashSet<i64>>>,
}

pub struct InFlightGuard {
    id: i64,
    ops: Arc<Mutex<HashSet<i64>>>,
}

impl InFlightRegistry {
    pub fn new() -> InFlightRegistry {
        InFlightRegistry::default()
    }

    /// Claims `id`, returning `None` when an operation on it is already in
    /// flight. The claim is released when the guard drops.
    pub fn begin(&self, id: i64) -> Option<InFlightGuard> {
        let mut ops = self.ops.lock().unwrap();
        if !ops.insert(id) {
            return None;
        }
        Some(InFlightGuard {
            id,
            ops: self.ops.clone(),
        })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.ops.lock().unwrap().remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_is_refused() {
        let registry = InFlightRegistry::new();
        let guard = registry.begin(1);
        assert!(guard.is_some());
        assert!(registry.begin(1).is_none());

        // Unrelated ids are unaffected
        assert!(registry.begin(2).is_some());
    }

    #[test]
    fn dropping_the_guard_releases_the_claim() {
        let registry = InFlightRegistry::new();
        let guard = registry.begin(1);
        drop(guard);
        assert!(registry.begin(1).is_some());
    }

    #[test]
    fn clones_share_the_registry() {
        let registry = InFlightRegistry::new();
        let clone = registry.clone();
        let _guard = registry.begin(1);
        assert!(clone.begin(1).is_none());
    }
}
