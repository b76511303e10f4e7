//! Repository implementations for database access.
//!
//! Each repository:
//! - Wraps a SQLx connection or transaction
//! - Provides strongly-typed CRUD operations
//! - Handles query construction and parameter binding
//! - Returns domain models from [`crate::db::models`]
//!
//! # Available Repositories
//!
//! - [`Employees`]: Employee record management
//!
//! # Common Pattern
//!
//! ```ignore
//! use empctl::db::handlers::{Employees, Repository};
//!
//! async fn example(pool: &sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut tx = pool.begin().await?;
//!     let mut repo = Employees::new(&mut tx);
//!
//!     let employees = repo.list(&Default::default()).await?;
//!
//!     tx.commit().await?;
//!     Ok(())
//! }
//! ```

pub mod employees;
pub mod repository;

pub use employees::Employees;
pub use repository::Repository;
