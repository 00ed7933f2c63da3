use std::sync::Arc;

use serde_json::{json, Value};

use cookbooks_core::cookbook::{Cookbook, CreateCookbookRequest, DeleteCookbookRequest};
use cookbooks_core::storage::CookbookRepository;

use crate::error::HandlerError;

use super::{parse_event, to_response};

/// Controller for cookbook operations.
pub struct CookbookController<R> {
    repo: Arc<R>,
}

impl<R: CookbookRepository> CookbookController<R> {
    /// Creates a controller backed by the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Creates a new cookbook from the event's `name` field.
    ///
    /// Returns the created record.
    pub async fn create(&self, event: &Value) -> Result<Value, HandlerError> {
        let request: CreateCookbookRequest = parse_event(event)?;
        if request.name.trim().is_empty() {
            return Err(HandlerError::Validation(
                "cookbook name must not be empty".to_string(),
            ));
        }

        let cookbook = Cookbook::new(request.name);
        self.repo.create_cookbook(&cookbook).await?;

        tracing::info!(cookbook_id = %cookbook.id, name = %cookbook.name, "Created cookbook");

        to_response(&cookbook)
    }

    /// Deletes the cookbook named by the event's `id` field.
    ///
    /// Returns the deleted identifier as confirmation.
    pub async fn delete(&self, event: &Value) -> Result<Value, HandlerError> {
        let request: DeleteCookbookRequest = parse_event(event)?;

        self.repo.delete_cookbook(request.id).await?;

        tracing::info!(cookbook_id = %request.id, "Deleted cookbook");

        Ok(json!({ "id": request.id }))
    }

    /// Lists all cookbooks.
    ///
    /// The event payload is ignored; records come back in whatever order
    /// the store yields them.
    pub async fn get_all(&self, _event: &Value) -> Result<Value, HandlerError> {
        let cookbooks = self.repo.get_cookbooks().await?;
        to_response(&cookbooks)
    }
}
