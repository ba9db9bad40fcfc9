//! Storage event payloads.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// Lifecycle notification kinds emitted around persistence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageEventKind {
    PreSave,
    PostSave,
    PreSaveAll,
    PostSaveAll,
}

impl StorageEventKind {
    /// Stable event name identifier (e.g. "storage.pre_save").
    pub fn event_name(&self) -> &'static str {
        match self {
            StorageEventKind::PreSave => "storage.pre_save",
            StorageEventKind::PostSave => "storage.post_save",
            StorageEventKind::PreSaveAll => "storage.pre_save_all",
            StorageEventKind::PostSaveAll => "storage.post_save_all",
        }
    }
}

/// Options attached to a save operation and forwarded on every notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOptions {
    /// True when the entity is saved on its own, false within a batch.
    pub unitary: bool,

    /// Free-form options forwarded untouched to subscribers.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, JsonValue>,
}

impl SaveOptions {
    pub fn unitary(mut self, unitary: bool) -> Self {
        self.unitary = unitary;
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.extras.insert(key.into(), value);
        self
    }
}

/// What a notification is about: one entity or a whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subject<T> {
    Single(T),
    Batch(Vec<T>),
}

impl<T> Subject<T> {
    /// Number of entities covered by the notification.
    pub fn len(&self) -> usize {
        match self {
            Subject::Single(_) => 1,
            Subject::Batch(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A lifecycle notification carrying its subject and the save options.
///
/// Events are immutable facts: they are built once by the saver and handed to
/// the dispatcher, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageEvent<T> {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub subject: Subject<T>,
    pub options: SaveOptions,
}

impl<T> StorageEvent<T> {
    /// Notification about a single entity.
    pub fn single(subject: T, options: SaveOptions) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            occurred_at: Utc::now(),
            subject: Subject::Single(subject),
            options,
        }
    }

    /// Notification about a batch of entities.
    pub fn batch(subjects: Vec<T>, options: SaveOptions) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            occurred_at: Utc::now(),
            subject: Subject::Batch(subjects),
            options,
        }
    }
}
