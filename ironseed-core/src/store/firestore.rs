// store/firestore.rs
//! Firestore REST backend
//!
//! Inserts go to
//! `POST {base}/v1/projects/{project}/databases/{database}/documents/{collection}`
//! without a `documentId` query parameter, so Firestore picks the id. The id
//! comes back as the last segment of the created document's `name`.

use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, trace};

use crate::auth::{StaticTokenSource, TokenSource};
use crate::document::{Document, DocumentId};
use crate::error::{Result, SeedError};
use crate::store::traits::{DocumentStore, StoreFuture};
use crate::store::value::encode_fields;

pub const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com";
pub const DEFAULT_DATABASE: &str = "(default)";

/// HTTP client used by both the token exchange and the store
pub fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("ironseed/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

#[derive(Debug, Deserialize)]
struct CreatedDocument {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

pub struct FirestoreStore {
    http: reqwest::Client,
    tokens: Box<dyn TokenSource>,
    base_url: String,
    project: String,
    database: String,
}

impl FirestoreStore {
    pub fn new(project: impl Into<String>, tokens: Box<dyn TokenSource>, http: reqwest::Client) -> Self {
        FirestoreStore {
            http,
            tokens,
            base_url: FIRESTORE_BASE_URL.to_string(),
            project: project.into(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }

    /// Local emulator at `host:port`; no credential exchange
    pub fn emulator(host: &str, project: impl Into<String>, http: reqwest::Client) -> Self {
        Self::new(project, Box::new(StaticTokenSource::emulator()), http)
            .with_base_url(format!("http://{}", host))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents/{}",
            self.base_url, self.project, self.database, collection
        )
    }

    async fn create(&self, collection: &str, doc: &Document) -> Result<DocumentId> {
        let url = self.collection_url(collection);
        let body = json!({ "fields": encode_fields(&doc.fields) });
        let token = self.tokens.token().await?;

        debug!(%url, "creating document");
        trace!(body = %body, "request body");

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        trace!(status = status.as_u16(), body = %text, "response");

        if !status.is_success() {
            return Err(rejection(status.as_u16(), &text));
        }

        let created: CreatedDocument = serde_json::from_str(&text)?;
        DocumentId::from_resource_name(&created.name).ok_or_else(|| {
            SeedError::Serialization(format!("Response has no document id: {}", created.name))
        })
    }
}

fn rejection(status: u16, body: &str) -> SeedError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => match error.status {
            Some(code) => format!("{}: {}", code, error.message),
            None => error.message,
        },
        Err(_) => match serde_json::from_str::<Value>(body) {
            Ok(value) => value.to_string(),
            Err(_) => body.trim().to_string(),
        },
    };
    SeedError::Rejected { status, message }
}

impl DocumentStore for FirestoreStore {
    fn add<'a>(&'a self, collection: &'a str, doc: &'a Document) -> StoreFuture<'a, DocumentId> {
        Box::pin(self.create(collection, doc))
    }

    fn backend(&self) -> &'static str {
        "firestore"
    }
}
