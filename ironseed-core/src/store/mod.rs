// store/mod.rs
//! Seeding targets

pub mod firestore;
pub mod memory;
pub mod traits;
pub mod value;

pub use firestore::{http_client, FirestoreStore, DEFAULT_DATABASE, FIRESTORE_BASE_URL};
pub use memory::{auto_id, MemoryStore, AUTO_ID_LEN};
pub use traits::{DocumentStore, StoreFuture};

use tracing::info;

use crate::auth::ServiceAccountTokenSource;
use crate::config::SeedConfig;
use crate::credential::ServiceAccountKey;
use crate::error::{Result, SeedError};

/// Build the store a run writes into.
///
/// - dry run: a fresh `MemoryStore`
/// - emulator host set: Firestore emulator, key file only consulted for the
///   project id when `project` is not configured
/// - otherwise: Firestore with the service-account key
pub fn connect(config: &SeedConfig) -> Result<Box<dyn DocumentStore>> {
    if config.dry_run {
        info!("dry run, writing to memory");
        return Ok(Box::new(MemoryStore::new()));
    }

    let http = http_client(config.timeout())?;

    if let Some(host) = config.emulator_host.as_deref() {
        let project = match &config.project {
            Some(project) => project.clone(),
            None if config.credentials.exists() => {
                ServiceAccountKey::from_file(&config.credentials)?.project_id
            }
            None => {
                return Err(SeedError::Config(
                    "project id required when using the emulator without a key file".to_string(),
                ))
            }
        };
        info!(%host, %project, "using Firestore emulator");
        return Ok(Box::new(
            FirestoreStore::emulator(host, project, http).with_database(config.database.clone()),
        ));
    }

    let key = ServiceAccountKey::from_file(&config.credentials)?;
    let project = config.project.clone().unwrap_or_else(|| key.project_id.clone());
    info!(%project, account = %key.client_email, "connecting to Firestore");

    let tokens = ServiceAccountTokenSource::new(key, http.clone())?;
    let mut store = FirestoreStore::new(project, Box::new(tokens), http)
        .with_database(config.database.clone());
    if let Some(endpoint) = &config.endpoint {
        store = store.with_base_url(endpoint.clone());
    }
    Ok(Box::new(store))
}
