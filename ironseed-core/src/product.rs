//! Product records as stored in the `products` collection
//!
//! Field names on the wire are fixed by the consuming app, misspellings
//! included (`product_Cetogory`, `saller_ID`).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "product_ID")]
    pub id: String,

    #[serde(rename = "product_Name")]
    pub name: String,

    #[serde(rename = "product_Price")]
    pub price: f64,

    /// ISO-8601, millisecond precision, UTC
    #[serde(rename = "product_Upload_")]
    pub uploaded_at: String,

    #[serde(rename = "product_Edit_Time")]
    pub edited_at: String,

    #[serde(rename = "product_Quantity")]
    pub quantity: u32,

    #[serde(rename = "product_Cetogory")]
    pub categories: Vec<String>,

    #[serde(rename = "saller_ID")]
    pub seller_id: String,

    #[serde(rename = "image_ID")]
    pub images: Vec<String>,

    #[serde(rename = "product_Description")]
    pub description: String,

    #[serde(rename = "degree_of_Newness")]
    pub newness: u8,
}

impl Product {
    pub fn display_name(&self) -> &str {
        &self.name
    }

    pub fn to_document(&self) -> Result<Document> {
        Document::from_record(self)
    }
}

/// `2025-03-01T08:15:30.123Z`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
