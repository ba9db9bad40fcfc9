//! Storage lifecycle events.
//!
//! Savers surround persistence with named notifications (pre/post save,
//! pre/post save-all). This crate defines the event payloads and the
//! dispatcher seam they travel through; the dispatcher is injected into each
//! saver at construction rather than resolved from a global registry.

pub mod dispatcher;
pub mod event;
pub mod recording;

pub use dispatcher::EventDispatcher;
pub use event::{SaveOptions, StorageEvent, StorageEventKind, Subject};
pub use recording::{RecordingDispatcher, RecordingError};
