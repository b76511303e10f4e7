//! Database repository for employees.

use crate::types::EmployeeId;
use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::employees::{EmployeeCreateDBRequest, EmployeeDBResponse, EmployeeUpdateDBRequest},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{Connection, FromRow, PgConnection};
use tracing::instrument;

/// Filter for listing employees
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub skip: i64,
    /// `None` returns every remaining row
    pub limit: Option<i64>,
}

impl EmployeeFilter {
    pub fn new(skip: i64, limit: Option<i64>) -> Self {
        Self { skip, limit }
    }
}

// Database entity model
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub email: String,
    pub dob: NaiveDate,
}

impl From<Employee> for EmployeeDBResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            role: employee.role,
            email: employee.email,
            dob: employee.dob,
        }
    }
}

pub struct Employees<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Employees<'c> {
    type CreateRequest = EmployeeCreateDBRequest;
    type UpdateRequest = EmployeeUpdateDBRequest;
    type Response = EmployeeDBResponse;
    type Id = EmployeeId;
    type Filter = EmployeeFilter;

    /// Inserts the row, then reads it back by its unique email so the response carries the
    /// server-assigned id and the stored representation of every column.
    #[instrument(skip(self, request), fields(email = %request.email), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let mut tx = self.db.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO employee (first_name, last_name, role, email, dob)
            VALUES ($1, $2, $3, $4, $5::date)
            "#,
        )
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.role)
        .bind(&request.email)
        .bind(&request.dob)
        .execute(&mut *tx)
        .await?;

        let employee = Employees::new(&mut tx)
            .get_by_email(&request.email)
            .await?
            .ok_or(DbError::NotFound)?;

        tx.commit().await?;

        Ok(employee)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employee WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(employee.map(EmployeeDBResponse::from))
    }

    #[instrument(skip(self, filter), fields(limit = ?filter.limit, skip = filter.skip), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        // LIMIT NULL is LIMIT ALL in PostgreSQL
        let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employee ORDER BY id LIMIT $1 OFFSET $2")
            .bind(filter.limit)
            .bind(filter.skip)
            .fetch_all(&mut *self.db)
            .await?;

        Ok(employees.into_iter().map(EmployeeDBResponse::from).collect())
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM employee WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Applies the patch column by column; absent fields keep their stored value.
    ///
    /// Returns [`DbError::NotFound`] when no row has the given id.
    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employee SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                role = COALESCE($4, role),
                email = COALESCE($5, email),
                dob = COALESCE($6::date, dob)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.role)
        .bind(&request.email)
        .bind(&request.dob)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(EmployeeDBResponse::from(employee))
    }
}

impl<'c> Employees<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, email), err)]
    pub async fn get_by_email(&mut self, email: &str) -> Result<Option<EmployeeDBResponse>> {
        let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employee WHERE email = $1")
            .bind(email)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(employee.map(EmployeeDBResponse::from))
    }
}
