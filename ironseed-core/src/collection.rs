//! Handle to one named collection

use tracing::debug;

use crate::document::{Document, DocumentId};
use crate::error::{Result, SeedError};
use crate::store::DocumentStore;

/// A store bound to a single collection name
pub struct CollectionRef<'s, S: DocumentStore + ?Sized> {
    store: &'s S,
    name: String,
}

impl<'s, S: DocumentStore + ?Sized> CollectionRef<'s, S> {
    /// Names must be non-empty and a single path segment
    pub fn new(store: &'s S, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() || name.contains('/') {
            return Err(SeedError::InvalidCollection(name));
        }
        Ok(CollectionRef { store, name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn add(&self, doc: &Document) -> Result<DocumentId> {
        let id = self.store.add(&self.name, doc).await?;
        debug!(collection = %self.name, backend = self.store.backend(), %id, "document added");
        Ok(id)
    }
}
