//! Built-in demo products and JSON fixture loading

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::path::Path;

use crate::error::{Result, SeedError};
use crate::product::{iso_timestamp, Product};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The four demo products, all stamped with the same instant.
pub fn sample_products(now: DateTime<Utc>) -> Vec<Product> {
    let stamp = iso_timestamp(now);

    vec![
        Product {
            id: "P0001".to_string(),
            name: "WATER Free Solution".to_string(),
            price: 20.0,
            uploaded_at: stamp.clone(),
            edited_at: stamp.clone(),
            quantity: 10,
            categories: strings(&["Beauty", "Eco-friendly"]),
            seller_id: "seller001".to_string(),
            images: strings(&[
                "assets/images/water_free.jpg",
                "assets/images/water_free.jpg",
            ]),
            description: "A revolutionary water-free solution for your beauty needs. Eco-friendly and effective.".to_string(),
            newness: 4,
        },
        Product {
            id: "P0002".to_string(),
            name: "WATER Not Free Solution".to_string(),
            price: 40.0,
            uploaded_at: stamp.clone(),
            edited_at: stamp.clone(),
            quantity: 15,
            categories: strings(&["Health", "Beauty"]),
            seller_id: "seller002".to_string(),
            images: strings(&["assets/images/water_not_free.jpg"]),
            description: "Premium water-based solution for optimal health benefits.".to_string(),
            newness: 2,
        },
        Product {
            id: "P0003".to_string(),
            name: "CryBaby Doll 10".to_string(),
            price: 20.0,
            uploaded_at: stamp.clone(),
            edited_at: stamp.clone(),
            quantity: 5,
            categories: strings(&["Toys", "Collectibles"]),
            seller_id: "seller003".to_string(),
            images: strings(&[
                "assets/images/crybaby.jpg",
                "assets/images/crybaby.jpg",
                "assets/images/crybaby.jpg",
            ]),
            description: "The latest CryBaby doll with enhanced features and accessories.".to_string(),
            newness: 3,
        },
        Product {
            id: "P0004".to_string(),
            name: "JoyCon NS【含清修的】".to_string(),
            price: 140.0,
            uploaded_at: stamp.clone(),
            edited_at: stamp,
            quantity: 2,
            categories: strings(&["Gaming", "Accessories"]),
            seller_id: "seller004".to_string(),
            images: strings(&["assets/images/joycon.jpg", "assets/images/jacket.jpg"]),
            description: "Refurbished Nintendo Switch JoyCon controllers, fully tested and cleaned.".to_string(),
            newness: 4,
        },
    ]
}

/// Load products from a JSON array file.
///
/// Entries use the stored field names. Missing timestamps are filled with `now`.
pub fn load_fixture_file(path: &Path, now: DateTime<Utc>) -> Result<Vec<Product>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SeedError::Fixture(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_fixtures(&content, now)
        .map_err(|e| SeedError::Fixture(format!("{}: {}", path.display(), e)))
}

fn parse_fixtures(content: &str, now: DateTime<Utc>) -> std::result::Result<Vec<Product>, String> {
    let value: Value = serde_json::from_str(content).map_err(|e| format!("Invalid JSON: {}", e))?;
    let entries = match value {
        Value::Array(entries) => entries,
        _ => return Err("Fixture file must contain a JSON array".to_string()),
    };
    if entries.is_empty() {
        return Err("Fixture file contains no products".to_string());
    }

    let stamp = Value::String(iso_timestamp(now));
    entries
        .into_iter()
        .enumerate()
        .map(|(index, mut entry)| {
            if let Value::Object(ref mut map) = entry {
                for field in ["product_Upload_", "product_Edit_Time"] {
                    map.entry(field).or_insert_with(|| stamp.clone());
                }
            }
            serde_json::from_value::<Product>(entry)
                .map_err(|e| format!("Entry {}: {}", index, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Write;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sample_products_in_order() {
        let products = sample_products(fixed_now());
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["P0001", "P0002", "P0003", "P0004"]);
    }

    #[test]
    fn test_timestamps_share_one_instant() {
        for product in sample_products(fixed_now()) {
            assert_eq!(product.uploaded_at, "2025-06-01T12:00:00.000Z");
            assert_eq!(product.uploaded_at, product.edited_at);
        }
    }

    #[test]
    fn test_crybaby_literal_values() {
        let p = &sample_products(fixed_now())[2];
        assert_eq!(p.name, "CryBaby Doll 10");
        assert_eq!(p.quantity, 5);
        assert_eq!(p.categories, ["Toys", "Collectibles"]);
        assert_eq!(p.images.len(), 3);
        assert_eq!(p.newness, 3);
    }

    #[test]
    fn test_non_ascii_name_kept() {
        let p = &sample_products(fixed_now())[3];
        assert_eq!(p.display_name(), "JoyCon NS【含清修的】");
        assert_eq!(p.price, 140.0);
    }

    #[test]
    fn test_load_fixture_file_fills_timestamps() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "product_ID": "X1",
                "product_Name": "Extra",
                "product_Price": 9.99,
                "product_Quantity": 1,
                "product_Cetogory": ["Misc"],
                "saller_ID": "seller100",
                "image_ID": [],
                "product_Description": "extra item",
                "degree_of_Newness": 5
            }}]"#
        )
        .unwrap();

        let products = load_fixture_file(file.path(), fixed_now()).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].uploaded_at, "2025-06-01T12:00:00.000Z");
        assert_eq!(products[0].edited_at, "2025-06-01T12:00:00.000Z");
    }

    #[test]
    fn test_load_fixture_file_keeps_given_timestamps() {
        let content = r#"[{
            "product_ID": "X2", "product_Name": "Old", "product_Price": 1.0,
            "product_Upload_": "2020-01-01T00:00:00.000Z",
            "product_Edit_Time": "2021-01-01T00:00:00.000Z",
            "product_Quantity": 0, "product_Cetogory": [], "saller_ID": "s",
            "image_ID": [], "product_Description": "", "degree_of_Newness": 0
        }]"#;
        let products = parse_fixtures(content, fixed_now()).unwrap();
        assert_eq!(products[0].uploaded_at, "2020-01-01T00:00:00.000Z");
        assert_eq!(products[0].edited_at, "2021-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_bundled_demo_fixtures_load() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos/products.json");
        let products = load_fixture_file(&path, fixed_now()).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].images.len(), 2);
    }

    #[test]
    fn test_fixture_errors() {
        assert!(parse_fixtures("{}", fixed_now()).unwrap_err().contains("array"));
        assert!(parse_fixtures("[]", fixed_now()).unwrap_err().contains("no products"));
        assert!(parse_fixtures("[{\"product_ID\": 1}]", fixed_now())
            .unwrap_err()
            .starts_with("Entry 0"));

        let missing = load_fixture_file(Path::new("/nonexistent/fixtures.json"), fixed_now());
        assert!(matches!(missing, Err(SeedError::Fixture(_))));
    }
}
