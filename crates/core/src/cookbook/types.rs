use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named container of recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookbook {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Cookbook {
    /// Creates a new cookbook with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    /// Sets a specific ID for this cookbook (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// A recipe belonging to exactly one cookbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub cookbook_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Creates a new recipe in the given cookbook.
    pub fn new(cookbook_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            cookbook_id,
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    /// Sets a specific ID for this recipe (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// A single key/value pair from the flat settings table.
///
/// The attribute names match the stored item layout (`Key`/`Value`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl Setting {
    /// Creates a new setting pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
