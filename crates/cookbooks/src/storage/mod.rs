//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `cookbooks_core::storage`:
//!
//! - `dynamodb`: the production backend, one SDK call per operation
//! - `inmemory`: a HashMap-backed backend compiled for tests only

pub mod dynamodb;

#[cfg(test)]
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;
