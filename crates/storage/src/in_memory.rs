//! In-memory storage backends for tests/dev.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

use crate::detacher::ObjectDetacher;
use crate::repository::{Identifiable, IdentifiableObjectRepository};
use crate::store::{StorageError, TransactionalStore};

/// In-memory stage/commit journal.
///
/// Intended for tests/dev. Keeps everything ever committed so assertions can
/// inspect write order and commit counts.
#[derive(Debug)]
pub struct InMemoryStore<T> {
    staged: Mutex<Vec<T>>,
    committed: Mutex<Vec<T>>,
    commits: AtomicUsize,
}

impl<T> InMemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects currently staged and not yet committed.
    pub fn staged_count(&self) -> usize {
        self.staged.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Number of commit calls performed so far (no-op commits included).
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }
}

impl<T: Clone> InMemoryStore<T> {
    /// Everything committed so far, in write order.
    pub fn committed(&self) -> Vec<T> {
        self.committed.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self {
            staged: Mutex::new(Vec::new()),
            committed: Mutex::new(Vec::new()),
            commits: AtomicUsize::new(0),
        }
    }
}

impl<T: Send + Sync> TransactionalStore<T> for InMemoryStore<T> {
    fn stage(&self, object: T) -> Result<(), StorageError> {
        let mut staged = self.staged.lock().map_err(|_| StorageError::Poisoned)?;
        staged.push(object);
        Ok(())
    }

    fn commit(&self) -> Result<usize, StorageError> {
        let mut staged = self.staged.lock().map_err(|_| StorageError::Poisoned)?;
        let mut committed = self.committed.lock().map_err(|_| StorageError::Poisoned)?;

        let written = staged.len();
        committed.append(&mut staged);
        self.commits.fetch_add(1, Ordering::SeqCst);

        Ok(written)
    }
}

/// In-memory repository keyed by business identifier, with detach tracking.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    objects: RwLock<HashMap<String, T>>,
    detached: Mutex<Vec<String>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            detached: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Identifiable + Clone> InMemoryRepository<T> {
    /// Insert or replace an entity under its identifier.
    pub fn insert(&self, entity: T) {
        if let Ok(mut objects) = self.objects.write() {
            objects.insert(entity.identifier().to_string(), entity);
        }
    }

    /// Identifiers detached so far, in detach order.
    pub fn detached_identifiers(&self) -> Vec<String> {
        self.detached.lock().map(|d| d.clone()).unwrap_or_default()
    }

    pub fn was_detached(&self, identifier: &str) -> bool {
        self.detached_identifiers().iter().any(|d| d == identifier)
    }
}

impl<T: Identifiable + Clone + Send + Sync> IdentifiableObjectRepository<T>
    for InMemoryRepository<T>
{
    fn identifier_property(&self) -> &'static str {
        T::identifier_property()
    }

    fn find_one_by_identifier(&self, identifier: &str) -> Option<T> {
        self.objects
            .read()
            .ok()
            .and_then(|objects| objects.get(identifier).cloned())
    }
}

impl<T: Identifiable + Send + Sync> ObjectDetacher<T> for InMemoryRepository<T> {
    fn detach(&self, entity: &T) {
        if let Ok(mut detached) = self.detached.lock() {
            detached.push(entity.identifier().to_string());
        }
    }
}
