//! Entity controllers.
//!
//! Each controller method translates one inbound event into one store call
//! and one shaped response. Validation happens before the store is touched.

mod cookbooks;
mod recipes;

pub use cookbooks::CookbookController;
pub use recipes::RecipeController;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::HandlerError;

/// Deserialize an event payload into a typed request.
///
/// Missing or malformed fields are validation errors, raised before any
/// store call is attempted.
fn parse_event<T: DeserializeOwned>(event: &Value) -> Result<T, HandlerError> {
    serde_json::from_value(event.clone()).map_err(|e| HandlerError::Validation(e.to_string()))
}

/// Serialize a controller result into the response value.
fn to_response<T: serde::Serialize>(value: &T) -> Result<Value, HandlerError> {
    serde_json::to_value(value).map_err(|e| HandlerError::Serialization(e.to_string()))
}
