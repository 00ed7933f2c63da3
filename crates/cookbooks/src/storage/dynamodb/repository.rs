//! DynamoDB repository implementation.
//!
//! Implements the repository traits from `cookbooks_core::storage` over
//! three named tables supplied by [`Config`].

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use cookbooks_core::cookbook::{Cookbook, Recipe};
use cookbooks_core::storage::{
    CookbookRepository, RecipeRepository, Result, SettingsRepository,
};

use crate::config::Config;

use super::conversions::{
    cookbook_to_item, item_to_cookbook, item_to_recipe, items_to_settings, recipe_to_item,
};
use super::error::{
    map_delete_item_error, map_put_item_error, map_query_error, map_scan_error,
};

/// DynamoDB-based repository implementation.
///
/// Holds one shared SDK client and the table names from the startup config.
pub struct DynamoDbRepository {
    client: Client,
    cookbook_table: String,
    recipe_table: String,
    settings_table: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and the
    /// table names from the startup configuration.
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            cookbook_table: config.cookbook_table.clone(),
            recipe_table: config.recipe_table.clone(),
            settings_table: config.settings_table.clone(),
        }
    }
}

#[async_trait]
impl CookbookRepository for DynamoDbRepository {
    async fn create_cookbook(&self, cookbook: &Cookbook) -> Result<()> {
        let item = cookbook_to_item(cookbook);

        self.client
            .put_item()
            .table_name(&self.cookbook_table)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "Cookbook", cookbook.id.to_string()))?;

        Ok(())
    }

    async fn delete_cookbook(&self, id: Uuid) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.cookbook_table)
            .key("id", AttributeValue::S(id.to_string()))
            .condition_expression("attribute_exists(id)")
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, "Cookbook", id.to_string()))?;

        Ok(())
    }

    async fn get_cookbooks(&self) -> Result<Vec<Cookbook>> {
        let result = self
            .client
            .scan()
            .table_name(&self.cookbook_table)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_cookbook).collect()
    }
}

#[async_trait]
impl RecipeRepository for DynamoDbRepository {
    async fn create_recipe(&self, recipe: &Recipe) -> Result<()> {
        let item = recipe_to_item(recipe);

        self.client
            .put_item()
            .table_name(&self.recipe_table)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "Recipe", recipe.id.to_string()))?;

        Ok(())
    }

    async fn get_recipes_by_cookbook(&self, cookbook_id: Uuid) -> Result<Vec<Recipe>> {
        let result = self
            .client
            .query()
            .table_name(&self.recipe_table)
            .key_condition_expression("cookbookId = :cookbookId")
            .expression_attribute_values(
                ":cookbookId",
                AttributeValue::S(cookbook_id.to_string()),
            )
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_recipe).collect()
    }
}

#[async_trait]
impl SettingsRepository for DynamoDbRepository {
    async fn get_settings(&self) -> Result<HashMap<String, String>> {
        let result = self
            .client
            .scan()
            .table_name(&self.settings_table)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        items_to_settings(&items)
    }
}
