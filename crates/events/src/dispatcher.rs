//! Event dispatch abstraction (mechanics only).
//!
//! The dispatcher is the **notification channel** a saver publishes lifecycle
//! events to. It is:
//!
//! - **Transport-agnostic**: an in-memory recorder, a message bus, a webhook
//!   fan-out — the saver does not care.
//! - **Fire-and-observe**: subscribers react to notifications; they cannot
//!   veto the save.
//!
//! Dispatch failures are surfaced to the caller so a saver can abort rather
//! than silently lose its post-save notifications.

use std::sync::Arc;

use crate::event::{StorageEvent, StorageEventKind};

/// Delivers storage lifecycle notifications to interested subscribers.
pub trait EventDispatcher<T>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn dispatch(&self, kind: StorageEventKind, event: StorageEvent<T>) -> Result<(), Self::Error>;
}

impl<T, D> EventDispatcher<T> for Arc<D>
where
    D: EventDispatcher<T> + ?Sized,
{
    type Error = D::Error;

    fn dispatch(&self, kind: StorageEventKind, event: StorageEvent<T>) -> Result<(), Self::Error> {
        (**self).dispatch(kind, event)
    }
}
