//! DynamoDB storage backend implementation.
//!
//! Implements the repository traits from `cookbooks_core::storage` using
//! `aws-sdk-dynamodb`. Each repository operation issues exactly one SDK call.
//!
//! Unlike a single-table layout, each entity lives in its own named table:
//! cookbooks keyed by `id`, recipes keyed by `cookbookId` (partition) plus
//! `id` (sort) so the by-parent query needs no secondary index, and settings
//! keyed by `Key`.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
