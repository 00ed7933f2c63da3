//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! domain types. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use cookbooks_core::cookbook::{Cookbook, Recipe, Setting};
use cookbooks_core::storage::RepositoryError;

// ============================================================================
// Cookbook conversions
// ============================================================================

/// Convert a Cookbook to a DynamoDB item.
pub fn cookbook_to_item(cookbook: &Cookbook) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        "id".to_string(),
        AttributeValue::S(cookbook.id.to_string()),
    );
    item.insert("name".to_string(), AttributeValue::S(cookbook.name.clone()));
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(cookbook.created_at.to_rfc3339()),
    );

    item
}

/// Convert a DynamoDB item to a Cookbook.
pub fn item_to_cookbook(
    item: &HashMap<String, AttributeValue>,
) -> Result<Cookbook, RepositoryError> {
    Ok(Cookbook {
        id: get_uuid(item, "id")?,
        name: get_string(item, "name")?,
        created_at: get_datetime(item, "createdAt")?,
    })
}

// ============================================================================
// Recipe conversions
// ============================================================================

/// Convert a Recipe to a DynamoDB item.
///
/// `cookbookId` is the partition key and `id` the sort key, so recipes of
/// one cookbook form a single item collection.
pub fn recipe_to_item(recipe: &Recipe) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        "cookbookId".to_string(),
        AttributeValue::S(recipe.cookbook_id.to_string()),
    );
    item.insert("id".to_string(), AttributeValue::S(recipe.id.to_string()));
    item.insert("name".to_string(), AttributeValue::S(recipe.name.clone()));
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(recipe.created_at.to_rfc3339()),
    );

    item
}

/// Convert a DynamoDB item to a Recipe.
pub fn item_to_recipe(item: &HashMap<String, AttributeValue>) -> Result<Recipe, RepositoryError> {
    Ok(Recipe {
        id: get_uuid(item, "id")?,
        cookbook_id: get_uuid(item, "cookbookId")?,
        name: get_string(item, "name")?,
        created_at: get_datetime(item, "createdAt")?,
    })
}

// ============================================================================
// Setting conversions
// ============================================================================

/// Convert a DynamoDB item from the settings table to a Setting.
pub fn item_to_setting(item: &HashMap<String, AttributeValue>) -> Result<Setting, RepositoryError> {
    Ok(Setting {
        key: get_string(item, "Key")?,
        value: get_string(item, "Value")?,
    })
}

/// Fold scanned settings items into a key -> value mapping.
///
/// Last write wins on duplicate keys, though keys are expected unique.
pub fn items_to_settings(
    items: &[HashMap<String, AttributeValue>],
) -> Result<HashMap<String, String>, RepositoryError> {
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        let setting = item_to_setting(item)?;
        map.insert(setting.key, setting.value);
    }
    Ok(map)
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required UUID attribute.
fn get_uuid(item: &HashMap<String, AttributeValue>, key: &str) -> Result<Uuid, RepositoryError> {
    let s = get_string(item, key)?;
    Uuid::parse_str(&s)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid UUID {}: {}", key, e)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}
