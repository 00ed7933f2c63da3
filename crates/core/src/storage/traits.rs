use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::cookbook::{Cookbook, Recipe};

use super::Result;

/// Repository for cookbook operations.
#[async_trait]
pub trait CookbookRepository: Send + Sync {
    /// Creates a new cookbook.
    async fn create_cookbook(&self, cookbook: &Cookbook) -> Result<()>;

    /// Deletes a cookbook by its ID.
    async fn delete_cookbook(&self, id: Uuid) -> Result<()>;

    /// Gets all cookbooks, in whatever order the store yields them.
    async fn get_cookbooks(&self) -> Result<Vec<Cookbook>>;
}

/// Repository for recipe operations.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Creates a new recipe.
    async fn create_recipe(&self, recipe: &Recipe) -> Result<()>;

    /// Gets all recipes belonging to a cookbook.
    async fn get_recipes_by_cookbook(&self, cookbook_id: Uuid) -> Result<Vec<Recipe>>;
}

/// Repository for the flat key/value settings table.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Reads the whole settings table into a key -> value mapping.
    ///
    /// Last write wins on duplicate keys, though keys are expected unique.
    /// A store failure is an error, never an empty mapping.
    async fn get_settings(&self) -> Result<HashMap<String, String>>;
}
