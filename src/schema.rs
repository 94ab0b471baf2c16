// src/schema.rs - Response shape contracts for the item service

use jsonschema::JSONSchema;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::error::{ProbeError, Result};

/// Schema every item representation must satisfy, whatever endpoint
/// produced it.
static ITEM_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "id": {"type": "string"},
            "sellerID": {"type": "integer"},
            "name": {"type": "string"},
            "price": {"type": "integer"},
            "likes": {"type": "integer"},
            "viewCount": {"type": "integer"},
            "contacts": {"type": "integer"},
            "createdAt": {"type": "string"}
        },
        "required": ["id", "sellerID", "name", "price", "likes", "viewCount", "contacts", "createdAt"]
    })
});

/// Schema for the statistics endpoint: an ordered sequence of counter
/// snapshots.
static STATISTIC_ARRAY_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "likes": {"type": "integer"},
                "viewCount": {"type": "integer"},
                "contacts": {"type": "integer"}
            },
            "required": ["likes", "viewCount", "contacts"]
        }
    })
});

static ITEM_VALIDATOR: Lazy<JSONSchema> =
    Lazy::new(|| JSONSchema::compile(&ITEM_SCHEMA).expect("item schema is valid"));

static STATISTIC_ARRAY_VALIDATOR: Lazy<JSONSchema> =
    Lazy::new(|| JSONSchema::compile(&STATISTIC_ARRAY_SCHEMA).expect("statistic schema is valid"));

fn check(validator: &JSONSchema, instance: &Value) -> Result<()> {
    if let Err(errors) = validator.validate(instance) {
        let violations = errors
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ProbeError::SchemaViolation {
            violations,
            instance: instance.clone(),
        });
    }
    Ok(())
}

/// Validate a JSON value against the Item schema.
pub fn validate_item(instance: &Value) -> Result<()> {
    check(&ITEM_VALIDATOR, instance)
}

/// Validate a JSON value against the Statistic-array schema.
pub fn validate_statistics(instance: &Value) -> Result<()> {
    check(&STATISTIC_ARRAY_VALIDATOR, instance)
}
