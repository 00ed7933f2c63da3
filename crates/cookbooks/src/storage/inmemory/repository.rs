//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use cookbooks_core::cookbook::{Cookbook, Recipe};
use cookbooks_core::storage::{
    CookbookRepository, RecipeRepository, RepositoryError, Result, SettingsRepository,
};

/// In-memory storage backend for testing.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    cookbooks: Arc<RwLock<HashMap<Uuid, Cookbook>>>,
    recipes: Arc<RwLock<HashMap<Uuid, Recipe>>>,
    settings: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a settings pair. Last write wins on duplicate keys.
    pub async fn put_setting(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut settings = self.settings.write().await;
        settings.insert(key.into(), value.into());
    }
}

#[async_trait]
impl CookbookRepository for InMemoryRepository {
    async fn create_cookbook(&self, cookbook: &Cookbook) -> Result<()> {
        let mut cookbooks = self.cookbooks.write().await;
        if cookbooks.contains_key(&cookbook.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Cookbook",
                id: cookbook.id.to_string(),
            });
        }
        cookbooks.insert(cookbook.id, cookbook.clone());
        Ok(())
    }

    async fn delete_cookbook(&self, id: Uuid) -> Result<()> {
        let mut cookbooks = self.cookbooks.write().await;
        if cookbooks.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Cookbook",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn get_cookbooks(&self) -> Result<Vec<Cookbook>> {
        let cookbooks = self.cookbooks.read().await;
        Ok(cookbooks.values().cloned().collect())
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRepository {
    async fn create_recipe(&self, recipe: &Recipe) -> Result<()> {
        let mut recipes = self.recipes.write().await;
        if recipes.contains_key(&recipe.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Recipe",
                id: recipe.id.to_string(),
            });
        }
        recipes.insert(recipe.id, recipe.clone());
        Ok(())
    }

    async fn get_recipes_by_cookbook(&self, cookbook_id: Uuid) -> Result<Vec<Recipe>> {
        let recipes = self.recipes.read().await;
        Ok(recipes
            .values()
            .filter(|r| r.cookbook_id == cookbook_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SettingsRepository for InMemoryRepository {
    async fn get_settings(&self) -> Result<HashMap<String, String>> {
        let settings = self.settings.read().await;
        Ok(settings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_cookbook_rejects_duplicate_id() {
        let repo = InMemoryRepository::new();
        let cookbook = Cookbook::new("Desserts");

        repo.create_cookbook(&cookbook).await.unwrap();
        let error = repo.create_cookbook(&cookbook).await.unwrap_err();
        assert!(matches!(error, RepositoryError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_delete_unknown_cookbook_is_not_found() {
        let repo = InMemoryRepository::new();
        let error = repo.delete_cookbook(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(error, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_recipes_filtered_by_cookbook() {
        let repo = InMemoryRepository::new();
        let desserts = Uuid::new_v4();
        let mains = Uuid::new_v4();

        repo.create_recipe(&Recipe::new(desserts, "Tiramisu"))
            .await
            .unwrap();
        repo.create_recipe(&Recipe::new(mains, "Milanesa"))
            .await
            .unwrap();

        let recipes = repo.get_recipes_by_cookbook(desserts).await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Tiramisu");
    }

    #[tokio::test]
    async fn test_get_settings_returns_seeded_mapping() {
        let repo = InMemoryRepository::new();
        repo.put_setting("a", "1").await;
        repo.put_setting("b", "2").await;

        let settings = repo.get_settings().await.unwrap();
        assert_eq!(settings.len(), 2);
        assert_eq!(settings["a"], "1");
        assert_eq!(settings["b"], "2");
    }

    #[tokio::test]
    async fn test_put_setting_last_write_wins() {
        let repo = InMemoryRepository::new();
        repo.put_setting("theme", "light").await;
        repo.put_setting("theme", "dark").await;

        let settings = repo.get_settings().await.unwrap();
        assert_eq!(settings["theme"], "dark");
    }
}
