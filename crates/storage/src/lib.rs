//! `cataloom-storage` — storage seams for catalog persistence.
//!
//! Persistence here is a **collaborator contract**, not an engine: savers and
//! processors talk to a transactional store, a repository, an updater and a
//! detacher through the traits in this crate. Production backends plug in
//! behind them; the in-memory implementations back the test harnesses.

pub mod detacher;
pub mod in_memory;
pub mod repository;
pub mod saver;
pub mod store;
pub mod updater;

pub use detacher::ObjectDetacher;
pub use in_memory::{InMemoryRepository, InMemoryStore};
pub use repository::{Identifiable, IdentifiableObjectRepository};
pub use saver::{BulkSaver, Saver};
pub use store::{StorageError, TransactionalStore};
pub use updater::ObjectUpdater;
