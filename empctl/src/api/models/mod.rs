//! API request and response data models.
//!
//! These structures define the public JSON contract. They are distinct from the database
//! models in [`crate::db::models`], and every one derives `utoipa::ToSchema` so it appears in
//! the generated OpenAPI document.
//!
//! - [`employees`]: Employee creation, patch, and response payloads

pub mod employees;
