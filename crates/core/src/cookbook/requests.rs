//! Event payload types for cookbook operations.
//!
//! Inbound Lambda events are JSON objects with operation-specific fields.
//! These are pure data types with no I/O; deserialization failures are
//! surfaced as validation errors by the handlers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event payload for creating a new cookbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCookbookRequest {
    pub name: String,
}

impl CreateCookbookRequest {
    /// Create a new request with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Event payload for deleting a cookbook by ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCookbookRequest {
    pub id: Uuid,
}

impl DeleteCookbookRequest {
    /// Create a new request for the given cookbook ID.
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// Event payload for listing the recipes of a cookbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCookbookRecipesRequest {
    pub cookbook_id: Uuid,
}

impl GetCookbookRecipesRequest {
    /// Create a new request for the given cookbook ID.
    pub fn new(cookbook_id: Uuid) -> Self {
        Self { cookbook_id }
    }
}
