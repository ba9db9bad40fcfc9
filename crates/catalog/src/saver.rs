//! Family saver: persistence wrapped in lifecycle notifications.

use thiserror::Error;
use tracing::debug;

use cataloom_core::DomainError;
use cataloom_events::{EventDispatcher, SaveOptions, StorageEvent, StorageEventKind};
use cataloom_storage::{BulkSaver, Saver, StorageError, TransactionalStore};

use crate::family::Family;

#[derive(Debug, Error)]
pub enum SaverError {
    /// The entity is not fit for persistence; nothing was staged.
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("event dispatch failed: {0}")]
    Dispatch(String),
}

/// Persists families, surrounding each write with pre/post notifications.
///
/// Both the store and the notification channel are injected at construction;
/// there is no global dispatcher.
///
/// Batch semantics: every element is validated **before** anything is staged,
/// so an invalid element means no store interaction at all. A batch issues a
/// single commit regardless of its size.
pub struct FamilySaver<M, D> {
    store: M,
    dispatcher: D,
}

impl<M, D> FamilySaver<M, D>
where
    M: TransactionalStore<Family>,
    D: EventDispatcher<Family>,
{
    pub fn new(store: M, dispatcher: D) -> Self {
        Self { store, dispatcher }
    }

    fn dispatch(
        &self,
        kind: StorageEventKind,
        event: StorageEvent<Family>,
    ) -> Result<(), SaverError> {
        self.dispatcher
            .dispatch(kind, event)
            .map_err(|err| SaverError::Dispatch(format!("{err:?}")))
    }
}

impl<M, D> Saver<Family> for FamilySaver<M, D>
where
    M: TransactionalStore<Family>,
    D: EventDispatcher<Family>,
{
    type Error = SaverError;

    fn save(&self, family: &Family, options: SaveOptions) -> Result<(), Self::Error> {
        family.ensure_valid()?;

        let options = options.unitary(true);

        self.dispatch(
            StorageEventKind::PreSave,
            StorageEvent::single(family.clone(), options.clone()),
        )?;

        self.store.stage(family.clone())?;
        self.store.commit()?;
        debug!(family = %family.code(), "family saved");

        self.dispatch(
            StorageEventKind::PostSave,
            StorageEvent::single(family.clone(), options),
        )?;

        Ok(())
    }
}

impl<M, D> BulkSaver<Family> for FamilySaver<M, D>
where
    M: TransactionalStore<Family>,
    D: EventDispatcher<Family>,
{
    type Error = SaverError;

    fn save_all(&self, families: &[Family], options: SaveOptions) -> Result<(), Self::Error> {
        if families.is_empty() {
            return Ok(());
        }

        // Validate the whole batch before touching the store: an invalid
        // element must leave nothing staged behind.
        for family in families {
            family.ensure_valid()?;
        }

        let options = options.unitary(false);

        self.dispatch(
            StorageEventKind::PreSaveAll,
            StorageEvent::batch(families.to_vec(), options.clone()),
        )?;

        for family in families {
            self.dispatch(
                StorageEventKind::PreSave,
                StorageEvent::single(family.clone(), options.clone()),
            )?;
            self.store.stage(family.clone())?;
        }

        let written = self.store.commit()?;
        debug!(count = written, "family batch committed");

        for family in families {
            self.dispatch(
                StorageEventKind::PostSave,
                StorageEvent::single(family.clone(), options.clone()),
            )?;
        }

        self.dispatch(
            StorageEventKind::PostSaveAll,
            StorageEvent::batch(families.to_vec(), options),
        )?;

        Ok(())
    }
}
