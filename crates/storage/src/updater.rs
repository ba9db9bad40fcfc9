//! Updater seam: apply canonicalized field data to an entity in place.

use cataloom_core::DomainResult;

/// Mutates an entity from converted field data.
///
/// Rejections are argument errors ([`cataloom_core::DomainError::InvalidArgument`]):
/// the caller is expected to detach the entity and record the message against
/// the input row rather than abort the batch.
pub trait ObjectUpdater<T>: Send + Sync {
    /// Canonicalized data shape this updater consumes.
    type Data;

    fn update(&self, entity: &mut T, data: &Self::Data) -> DomainResult<()>;
}
