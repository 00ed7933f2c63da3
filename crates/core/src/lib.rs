//! Core domain layer for the cookbooks service.
//!
//! Pure data types and storage traits with no I/O. Concrete storage
//! backends live in the `cookbooks` crate.

pub mod cookbook;
pub mod storage;
