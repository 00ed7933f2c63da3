//! Operation dispatch.
//!
//! Maps an operation to its controller method and normalizes completion:
//! the result of the single store call comes back unchanged, and a failure
//! is logged exactly once before it propagates.
//!
//! The operation set is closed. Parsing a name happens once at cold start;
//! an unrecognized name is a deployment defect, not per-request input.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use cookbooks_core::storage::{CookbookRepository, RecipeRepository};

use crate::controllers::{CookbookController, RecipeController};
use crate::error::HandlerError;

/// The closed set of dispatchable operations.
///
/// Names mirror the deployed handler names (`createCookbook`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateCookbook,
    DeleteCookbook,
    GetCookbooks,
    GetCookbookRecipes,
}

impl Operation {
    /// All operations, for exhaustive routing tests.
    pub const ALL: [Operation; 4] = [
        Operation::CreateCookbook,
        Operation::DeleteCookbook,
        Operation::GetCookbooks,
        Operation::GetCookbookRecipes,
    ];

    /// The deployed handler name for this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CreateCookbook => "createCookbook",
            Operation::DeleteCookbook => "deleteCookbook",
            Operation::GetCookbooks => "getCookbooks",
            Operation::GetCookbookRecipes => "getCookbookRecipes",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an operation name outside the closed set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createCookbook" => Ok(Operation::CreateCookbook),
            "deleteCookbook" => Ok(Operation::DeleteCookbook),
            "getCookbooks" => Ok(Operation::GetCookbooks),
            "getCookbookRecipes" => Ok(Operation::GetCookbookRecipes),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}

/// Routes operations to controller methods.
pub struct Dispatcher<R> {
    cookbooks: CookbookController<R>,
    recipes: RecipeController<R>,
}

impl<R> Dispatcher<R>
where
    R: CookbookRepository + RecipeRepository,
{
    /// Creates a dispatcher with controllers sharing the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            cookbooks: CookbookController::new(repo.clone()),
            recipes: RecipeController::new(repo),
        }
    }

    /// Executes one operation against one event payload.
    ///
    /// Returns the controller result unchanged on success. On failure the
    /// error is logged here, once, and propagated; controllers never log
    /// errors themselves.
    pub async fn execute(&self, operation: Operation, event: &Value) -> Result<Value, HandlerError> {
        let result = match operation {
            Operation::CreateCookbook => self.cookbooks.create(event).await,
            Operation::DeleteCookbook => self.cookbooks.delete(event).await,
            Operation::GetCookbooks => self.cookbooks.get_all(event).await,
            Operation::GetCookbookRecipes => self.recipes.get_by_cookbook(event).await,
        };

        if let Err(error) = &result {
            tracing::error!(%operation, %error, "Operation failed");
        }

        result
    }
}
