//! HTTP request handlers for all API endpoints.
//!
//! Each handler is responsible for:
//! - Request validation and deserialization
//! - Business logic execution via database repositories
//! - Response serialization
//!
//! Writes run inside a transaction that is committed only once the handler succeeds.
//!
//! # Handler Modules
//!
//! - [`employees`]: Employee listing, lookup, creation, partial update and deletion

pub mod employees;
