//! API request/response models for employees.

use crate::db::models::employees::EmployeeDBResponse;
use crate::types::EmployeeId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// Employee request models
/// New employee. Every field is required.
///
/// Fields are optional at the JSON level: a missing email or dob fails validation, and a missing
/// name or role is refused by the table's `NOT NULL` constraints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EmployeeCreate {
    #[schema(example = "Ola")]
    pub first_name: Option<String>,
    #[schema(example = "Ige")]
    pub last_name: Option<String>,
    #[schema(example = "janitor")]
    pub role: Option<String>,
    #[schema(example = "ola.ige@test.com")]
    pub email: Option<String>,
    /// Date of birth as `YYYY-MM-DD`
    #[schema(example = "1997-04-10")]
    pub dob: Option<String>,
}

/// Partial update: only the fields present are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    /// Date of birth as `YYYY-MM-DD`
    #[schema(example = "1997-04-10")]
    pub dob: Option<String>,
}

// Employee response models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub email: String,
    #[schema(value_type = String, format = Date, example = "1997-04-10")]
    pub dob: NaiveDate,
}

/// Envelope for single-employee responses: `{"employee": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeEnvelope {
    pub employee: EmployeeResponse,
}

/// Envelope for the collection response: `{"employees": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeListEnvelope {
    pub employees: Vec<EmployeeResponse>,
}

/// Query parameters for listing employees
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListEmployeesQuery {
    /// Number of employees to skip
    pub skip: Option<i64>,
    /// Maximum number of employees to return (all when omitted)
    pub limit: Option<i64>,
}

impl From<EmployeeDBResponse> for EmployeeResponse {
    fn from(db: EmployeeDBResponse) -> Self {
        Self {
            id: db.id,
            first_name: db.first_name,
            last_name: db.last_name,
            role: db.role,
            email: db.email,
            dob: db.dob,
        }
    }
}

impl From<EmployeeDBResponse> for EmployeeEnvelope {
    fn from(db: EmployeeDBResponse) -> Self {
        Self {
            employee: EmployeeResponse::from(db),
        }
    }
}
