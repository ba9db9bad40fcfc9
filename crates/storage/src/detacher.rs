//! Detacher seam: drop an entity from pending-change tracking.

/// Removes an entity from whatever pending-change tracking the backend keeps.
///
/// Detaching never deletes from storage; it only guarantees a later commit
/// will not pick the entity up. Used when a row is skipped after its product
/// was already mutated in memory.
pub trait ObjectDetacher<T>: Send + Sync {
    fn detach(&self, entity: &T);
}
