// ironseed-core/src/lib.rs
// Fixture seeding for Firestore collections

pub mod auth;
pub mod collection;
pub mod config;
pub mod credential;
pub mod document;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod product;
pub mod report;
pub mod seed;
pub mod store;

// Public exports
pub use auth::{ServiceAccountTokenSource, StaticTokenSource, TokenSource};
pub use collection::CollectionRef;
pub use config::{ConfigOverrides, SeedConfig};
pub use credential::ServiceAccountKey;
pub use document::{Document, DocumentId};
pub use error::{Result, SeedError};
pub use fixtures::{load_fixture_file, sample_products};
pub use logging::{init_logging, LogLevel};
pub use product::Product;
pub use report::ConsoleReporter;
pub use seed::{run, seed_collection, InsertedRecord, SeedReport};
pub use store::{connect, DocumentStore, FirestoreStore, MemoryStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
