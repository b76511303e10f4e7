//! Database record structures.
//!
//! Each module holds the request types a repository accepts and the response type it returns.
//! They are kept apart from the API models in [`crate::api::models`] so the storage and wire
//! representations can change independently.

pub mod employees;
