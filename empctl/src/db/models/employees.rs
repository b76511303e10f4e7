//! Database models for employees.

use crate::api::models::employees::EmployeeUpdate;
use crate::types::EmployeeId;
use chrono::NaiveDate;

/// Database request for creating a new employee
///
/// `email` and `dob` have passed validation. The other columns are passed through as sent; a
/// missing one binds as `NULL` and the insert fails on the `NOT NULL` constraint. `dob` stays
/// textual: it has only been shape-checked, and PostgreSQL performs the calendar check when the
/// value is cast to `DATE`.
#[derive(Debug, Clone)]
pub struct EmployeeCreateDBRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub email: String,
    pub dob: String,
}

/// Database request for updating an employee
///
/// One optional value per mutable column; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdateDBRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub dob: Option<String>,
}

impl EmployeeUpdateDBRequest {
    pub fn new(update: EmployeeUpdate) -> Self {
        Self {
            first_name: update.first_name,
            last_name: update.last_name,
            role: update.role,
            email: update.email,
            dob: update.dob,
        }
    }

    /// True when the patch would not touch any column
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.role.is_none() && self.email.is_none() && self.dob.is_none()
    }
}

/// Database response for an employee
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDBResponse {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub email: String,
    pub dob: NaiveDate,
}
