// store/memory.rs
//! In-memory store for dry runs and tests
//!
//! ```text
//! MemoryStore (DocumentStore implementation)
//!      ↓
//! HashMap<String, Vec<Document>> (collection -> documents, insertion order)
//! ```

use parking_lot::RwLock;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::collections::HashMap;

use crate::document::{Document, DocumentId};
use crate::store::traits::{DocumentStore, StoreFuture};

/// Length of a Firestore auto-generated id
pub const AUTO_ID_LEN: usize = 20;

/// Random id shaped like Firestore's auto-ids
pub fn auto_id() -> DocumentId {
    let id: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(AUTO_ID_LEN)
        .map(char::from)
        .collect();
    DocumentId::new(id)
}

/// Ephemeral store; data is lost when dropped.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection (0 if it does not exist)
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map_or(0, |docs| docs.len())
    }

    /// Snapshot of a collection, in insertion order, ids filled in
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .read()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn get(&self, collection: &str, id: &DocumentId) -> Option<Document> {
        self.collections
            .read()
            .get(collection)?
            .iter()
            .find(|doc| doc.id.as_ref() == Some(id))
            .cloned()
    }

    pub fn collections(&self) -> Vec<String> {
        let mut names: Vec<String> = self.collections.read().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert(&self, collection: &str, doc: &Document) -> DocumentId {
        let mut collections = self.collections.write();
        let docs = collections.entry(collection.to_string()).or_default();

        let mut id = auto_id();
        while docs.iter().any(|d| d.id.as_ref() == Some(&id)) {
            id = auto_id();
        }
        docs.push(doc.clone().with_id(id.clone()));
        id
    }
}

impl DocumentStore for MemoryStore {
    fn add<'a>(&'a self, collection: &'a str, doc: &'a Document) -> StoreFuture<'a, DocumentId> {
        Box::pin(async move { Ok(self.insert(collection, doc)) })
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
