//! The `Repository` seam between the HTTP handlers and a PostgreSQL table.
//!
//! Implementors borrow one connection (or an open transaction) for their lifetime, so a handler
//! decides the transaction boundary and the repository only issues statements inside it.
use crate::db::errors::Result;

#[async_trait::async_trait]
pub trait Repository {
    /// Validated insert payload.
    type CreateRequest;
    /// Column-by-column patch; `None` leaves a column untouched.
    type UpdateRequest;
    /// Row as read back from the table.
    type Response;
    type Id: Send + Sync;
    /// Paging window for `list`.
    type Filter: Send + Sync;

    /// Insert a row and return it as stored, including the generated id.
    ///
    /// Constraint failures come back as the matching [`DbError`](crate::db::errors::DbError)
    /// variant and leave no row behind.
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// `Ok(None)` when no row has this id.
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>>;

    /// Rows in id order, windowed by the filter.
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>>;

    /// Apply a patch and return the row after the write.
    ///
    /// A missing id is [`DbError::NotFound`](crate::db::errors::DbError::NotFound), not `Ok`.
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response>;

    /// `true` if a row was removed.
    async fn delete(&mut self, id: Self::Id) -> Result<bool>;
}
