use std::env;

/// Application configuration loaded from environment variables.
///
/// Built once at cold start and passed by reference into every component;
/// nothing reads the environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the cookbook table (default: "Cookbook")
    pub cookbook_table: String,
    /// Name of the recipe table (default: "Recipe")
    pub recipe_table: String,
    /// Name of the flat key/value settings table (default: "Config")
    pub settings_table: String,
    /// Optional DynamoDB endpoint override (e.g. for DynamoDB Local).
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `COOKBOOK_TABLE` - Cookbook table name (default: "Cookbook")
    /// - `RECIPE_TABLE` - Recipe table name (default: "Recipe")
    /// - `SETTINGS_TABLE` - Settings table name (default: "Config")
    /// - `AWS_ENDPOINT_URL` - DynamoDB endpoint override (default: none)
    pub fn from_env() -> Self {
        Self {
            cookbook_table: env::var("COOKBOOK_TABLE").unwrap_or_else(|_| "Cookbook".to_string()),
            recipe_table: env::var("RECIPE_TABLE").unwrap_or_else(|_| "Recipe".to_string()),
            settings_table: env::var("SETTINGS_TABLE").unwrap_or_else(|_| "Config".to_string()),
            endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
        }
    }
}
