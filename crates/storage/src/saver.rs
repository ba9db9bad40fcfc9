//! Saver contracts: persist entities with surrounding lifecycle notifications.

use cataloom_events::SaveOptions;

/// Persists one entity.
pub trait Saver<T> {
    type Error;

    fn save(&self, entity: &T, options: SaveOptions) -> Result<(), Self::Error>;
}

/// Persists a batch of entities with a single commit.
pub trait BulkSaver<T> {
    type Error;

    fn save_all(&self, entities: &[T], options: SaveOptions) -> Result<(), Self::Error>;
}
