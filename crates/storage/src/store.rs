//! Explicit stage/commit persistence abstraction.
//!
//! Instead of an implicit unit-of-work, writers stage objects and commit the
//! staged batch in one call. One `commit` makes one storage round trip no
//! matter how many objects were staged before it.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Internal lock poisoning in an in-memory backend.
    #[error("storage lock poisoned")]
    Poisoned,

    /// Backend rejected the staged batch.
    #[error("commit failed: {0}")]
    CommitFailed(String),
}

/// Staged-write store with an explicit batch commit.
///
/// Contract:
/// - `stage` buffers an object for the next commit; it performs no IO.
/// - `commit` persists everything staged since the previous commit, in staging
///   order, and returns how many objects were written. Committing with nothing
///   staged is a valid no-op returning 0.
pub trait TransactionalStore<T>: Send + Sync {
    fn stage(&self, object: T) -> Result<(), StorageError>;

    fn commit(&self) -> Result<usize, StorageError>;
}

impl<T, S> TransactionalStore<T> for std::sync::Arc<S>
where
    S: TransactionalStore<T> + ?Sized,
{
    fn stage(&self, object: T) -> Result<(), StorageError> {
        (**self).stage(object)
    }

    fn commit(&self) -> Result<usize, StorageError> {
        (**self).commit()
    }
}
