// src/store/traits.rs
//! Storage abstraction for seeding targets
//!
//! ```text
//! DocumentStore trait (insert-only interface)
//!   ├── FirestoreStore (production, REST API or local emulator)
//!   └── MemoryStore (dry runs and tests, in-memory HashMap)
//! ```

use std::future::Future;
use std::pin::Pin;

use crate::document::{Document, DocumentId};
use crate::error::Result;

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Insert-only document store.
///
/// The store, not the caller, picks the identifier of each new document.
/// Adding the same content twice creates two documents.
pub trait DocumentStore: Send + Sync {
    /// Add a document to `collection`, returning the generated identifier.
    fn add<'a>(&'a self, collection: &'a str, doc: &'a Document) -> StoreFuture<'a, DocumentId>;

    /// Short backend label for log lines
    fn backend(&self) -> &'static str;
}

impl<S: DocumentStore + ?Sized> DocumentStore for Box<S> {
    fn add<'a>(&'a self, collection: &'a str, doc: &'a Document) -> StoreFuture<'a, DocumentId> {
        (**self).add(collection, doc)
    }

    fn backend(&self) -> &'static str {
        (**self).backend()
    }
}
