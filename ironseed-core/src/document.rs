// src/document.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{Result, SeedError};

/// A record on its way into a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Assigned by the store on insertion; `None` before that
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<DocumentId>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Store-generated document identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        DocumentId(id.into())
    }

    /// Last path segment of a fully qualified resource name
    /// (`projects/p/databases/d/documents/products/abc` -> `abc`)
    pub fn from_resource_name(name: &str) -> Option<Self> {
        name.rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .map(DocumentId::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Document {
    pub fn new(fields: Map<String, Value>) -> Self {
        Document { id: None, fields }
    }

    /// Build a document from any record that serializes to a JSON object
    pub fn from_record<T: Serialize>(record: &T) -> Result<Self> {
        match serde_json::to_value(record)? {
            Value::Object(fields) => Ok(Document::new(fields)),
            other => Err(SeedError::Serialization(format!(
                "Document must be an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Same as `from_record`, keeping an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Document::new(fields)),
            other => Err(SeedError::Serialization(format!(
                "Document must be an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn with_id(mut self, id: DocumentId) -> Self {
        self.id = Some(id);
        self
    }

    /// Field lookup with dot notation ("product_Cetogory.0")
    pub fn get(&self, field: &str) -> Option<&Value> {
        if field.is_empty() {
            return None;
        }
        let mut parts = field.split('.');
        let mut value = self.fields.get(parts.next()?)?;
        for part in parts {
            match value {
                Value::Object(map) => {
                    value = map.get(part)?;
                }
                Value::Array(arr) => {
                    value = arr.get(part.parse::<usize>().ok()?)?;
                }
                _ => return None,
            }
        }
        Some(value)
    }

    /// String field with dot notation, `None` if missing or not a string
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
