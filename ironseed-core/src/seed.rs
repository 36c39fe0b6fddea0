//! The seeding loop
//!
//! Records are inserted strictly one after another. The first failure stops
//! the loop; nothing after it is attempted and nothing is retried.

use chrono::{DateTime, Utc};
use std::io::Write;
use tracing::{error, info};

use crate::collection::CollectionRef;
use crate::config::SeedConfig;
use crate::document::DocumentId;
use crate::error::Result;
use crate::fixtures::{load_fixture_file, sample_products};
use crate::product::Product;
use crate::report::ConsoleReporter;
use crate::store::{connect, DocumentStore};

/// One successful insert
#[derive(Debug, Clone, PartialEq)]
pub struct InsertedRecord {
    /// `product_ID` of the source record
    pub product_id: String,
    pub name: String,
    /// Identifier generated by the store
    pub id: DocumentId,
}

/// Outcome of a complete run
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    pub collection: String,
    /// In insertion order
    pub inserted: Vec<InsertedRecord>,
}

impl SeedReport {
    pub fn len(&self) -> usize {
        self.inserted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty()
    }
}

/// Insert `products` into `collection` in list order.
///
/// `on_inserted` runs after each insert completes and before the next one
/// starts; an error from it aborts the run like an insert failure.
pub async fn seed_collection<S, F>(
    collection: &CollectionRef<'_, S>,
    products: &[Product],
    mut on_inserted: F,
) -> Result<SeedReport>
where
    S: DocumentStore + ?Sized,
    F: FnMut(&InsertedRecord) -> Result<()>,
{
    info!(
        collection = collection.name(),
        count = products.len(),
        "seeding collection"
    );

    let mut report = SeedReport {
        collection: collection.name().to_string(),
        inserted: Vec::with_capacity(products.len()),
    };

    for (index, product) in products.iter().enumerate() {
        let doc = product.to_document()?;
        let id = match collection.add(&doc).await {
            Ok(id) => id,
            Err(e) => {
                error!(
                    product_id = %product.id,
                    position = index,
                    skipped = products.len() - index - 1,
                    "insert failed, aborting"
                );
                return Err(e);
            }
        };

        let record = InsertedRecord {
            product_id: product.id.clone(),
            name: product.display_name().to_string(),
            id,
        };
        on_inserted(&record)?;
        report.inserted.push(record);
    }

    info!(
        collection = collection.name(),
        inserted = report.len(),
        "seeding complete"
    );
    Ok(report)
}

/// A whole run: connect, pick the records, seed, print the summary.
///
/// Records are stamped with `now`. The failure line is left to the caller,
/// which also owns the exit status.
pub async fn run<O: Write, E: Write>(
    config: &SeedConfig,
    now: DateTime<Utc>,
    reporter: &mut ConsoleReporter<O, E>,
) -> Result<SeedReport> {
    config.validate()?;

    let store = connect(config)?;
    let collection = CollectionRef::new(&*store, config.collection.clone())?;

    let products = match &config.fixtures {
        Some(path) => load_fixture_file(path, now)?,
        None => sample_products(now),
    };

    let report = seed_collection(&collection, &products, |record| reporter.inserted(record)).await?;
    reporter.finished()?;
    Ok(report)
}
