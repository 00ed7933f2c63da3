use std::sync::Arc;

use serde_json::Value;

use cookbooks_core::cookbook::GetCookbookRecipesRequest;
use cookbooks_core::storage::RecipeRepository;

use crate::error::HandlerError;

use super::{parse_event, to_response};

/// Controller for recipe operations.
pub struct RecipeController<R> {
    repo: Arc<R>,
}

impl<R: RecipeRepository> RecipeController<R> {
    /// Creates a controller backed by the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Lists the recipes belonging to the cookbook named by the event's
    /// `cookbookId` field.
    ///
    /// A missing or malformed `cookbookId` is a validation error, never a
    /// silently-empty result.
    pub async fn get_by_cookbook(&self, event: &Value) -> Result<Value, HandlerError> {
        let request: GetCookbookRecipesRequest = parse_event(event)?;

        let recipes = self.repo.get_recipes_by_cookbook(request.cookbook_id).await?;
        to_response(&recipes)
    }
}
