// Shared helpers for IronSeed integration tests
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use ironseed_core::{
    Document, DocumentId, DocumentStore, Result, SeedError, ServiceAccountKey,
};
use ironseed_core::store::StoreFuture;
use parking_lot::Mutex;
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const TEST_PROJECT: &str = "ironseed-test";
pub const TEST_ACCESS_TOKEN: &str = "ya29.test-access-token";

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Copy of the test key pointing its token endpoint at `token_uri`
pub fn key_file_with_token_uri(token_uri: &str) -> NamedTempFile {
    let content = std::fs::read_to_string(fixture_path("test-service-account.json")).unwrap();
    let mut key: Value = serde_json::from_str(&content).unwrap();
    key["token_uri"] = Value::String(token_uri.to_string());

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(key.to_string().as_bytes()).unwrap();
    file
}

pub fn test_key(token_uri: &str) -> ServiceAccountKey {
    let file = key_file_with_token_uri(token_uri);
    ServiceAccountKey::from_file(file.path()).unwrap()
}

pub fn token_response() -> String {
    token_response_expiring_in(3599)
}

pub fn token_response_expiring_in(expires_in: i64) -> String {
    format!(
        r#"{{"access_token": "{}", "expires_in": {}, "token_type": "Bearer"}}"#,
        TEST_ACCESS_TOKEN, expires_in
    )
}

pub fn created_response(collection: &str, id: &str) -> String {
    format!(
        r#"{{"name": "projects/{}/databases/(default)/documents/{}/{}", "fields": {{}}, "createTime": "2025-06-01T12:00:00.123456Z", "updateTime": "2025-06-01T12:00:00.123456Z"}}"#,
        TEST_PROJECT, collection, id
    )
}

/// Store that fails the n-th insert (0-based) and records every attempt
pub struct FailingStore {
    fail_at: usize,
    pub attempts: Mutex<Vec<Document>>,
}

impl FailingStore {
    pub fn new(fail_at: usize) -> Self {
        FailingStore {
            fail_at,
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.lock().len()
    }
}

impl DocumentStore for FailingStore {
    fn add<'a>(&'a self, _collection: &'a str, doc: &'a Document) -> StoreFuture<'a, DocumentId> {
        Box::pin(async move {
            let attempt = {
                let mut attempts = self.attempts.lock();
                attempts.push(doc.clone());
                attempts.len() - 1
            };
            if attempt == self.fail_at {
                return Err(SeedError::Rejected {
                    status: 503,
                    message: "UNAVAILABLE: simulated outage".to_string(),
                });
            }
            let result: Result<DocumentId> = Ok(DocumentId::new(format!("doc{}", attempt)));
            result
        })
    }

    fn backend(&self) -> &'static str {
        "failing"
    }
}
