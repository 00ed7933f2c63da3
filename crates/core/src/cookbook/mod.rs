//! Cookbook domain types and request payloads.

mod requests;
mod types;

pub use requests::{CreateCookbookRequest, DeleteCookbookRequest, GetCookbookRecipesRequest};
pub use types::{Cookbook, Recipe, Setting};
