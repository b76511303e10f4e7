//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL.
//! It follows the Repository pattern to provide clean abstractions over database operations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (API request handlers)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │
//! └─────────────┘
//! ```
//!
//! # Transactions
//!
//! Repositories borrow a connection rather than owning one. Handlers that issue more than one
//! statement create the repository from a transaction so the steps commit together; a
//! transaction that is dropped without `commit` rolls back, and the borrowed connection goes
//! back to the pool on every path.
//!
//! ```ignore
//! let mut tx = pool.begin().await?;
//! let mut repo = Employees::new(&mut tx);
//! // ... operations ...
//! tx.commit().await?;
//! ```
//!
//! # Migrations
//!
//! The `employee` table is created by the migration in `migrations/`, applied at startup by
//! [`crate::migrator`].

pub mod errors;
pub mod handlers;
pub mod models;
