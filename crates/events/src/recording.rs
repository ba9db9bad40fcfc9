//! In-memory recording dispatcher for tests/dev.

use std::sync::Mutex;

use crate::dispatcher::EventDispatcher;
use crate::event::{StorageEvent, StorageEventKind};

#[derive(Debug)]
pub enum RecordingError {
    /// Dispatch failed due to internal lock poisoning.
    Poisoned,
}

/// Dispatcher that records every notification in dispatch order.
///
/// - No IO / no async
/// - Keeps full payload copies so tests can assert on subjects and options
#[derive(Debug)]
pub struct RecordingDispatcher<T> {
    dispatched: Mutex<Vec<(StorageEventKind, StorageEvent<T>)>>,
}

impl<T> RecordingDispatcher<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Default for RecordingDispatcher<T> {
    fn default() -> Self {
        Self {
            dispatched: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Clone> RecordingDispatcher<T> {
    /// All recorded notifications, in dispatch order.
    pub fn recorded(&self) -> Vec<(StorageEventKind, StorageEvent<T>)> {
        self.dispatched
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Event kinds only, in dispatch order.
    pub fn recorded_kinds(&self) -> Vec<StorageEventKind> {
        self.dispatched
            .lock()
            .map(|events| events.iter().map(|(kind, _)| *kind).collect())
            .unwrap_or_default()
    }

    /// Number of notifications recorded for one kind.
    pub fn count_of(&self, kind: StorageEventKind) -> usize {
        self.recorded_kinds().iter().filter(|k| **k == kind).count()
    }
}

impl<T> EventDispatcher<T> for RecordingDispatcher<T>
where
    T: Clone + Send + 'static,
{
    type Error = RecordingError;

    fn dispatch(&self, kind: StorageEventKind, event: StorageEvent<T>) -> Result<(), Self::Error> {
        let mut dispatched = self.dispatched.lock().map_err(|_| RecordingError::Poisoned)?;
        dispatched.push((kind, event));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::SaveOptions;

    #[test]
    fn records_notifications_in_dispatch_order() {
        let dispatcher: RecordingDispatcher<&str> = RecordingDispatcher::new();

        dispatcher
            .dispatch(
                StorageEventKind::PreSave,
                StorageEvent::single("family_a", SaveOptions::default()),
            )
            .unwrap();
        dispatcher
            .dispatch(
                StorageEventKind::PostSave,
                StorageEvent::single("family_a", SaveOptions::default()),
            )
            .unwrap();

        assert_eq!(
            dispatcher.recorded_kinds(),
            vec![StorageEventKind::PreSave, StorageEventKind::PostSave]
        );
        assert_eq!(dispatcher.count_of(StorageEventKind::PreSave), 1);
    }
}
