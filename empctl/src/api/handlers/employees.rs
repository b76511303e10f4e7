use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::api::models::employees::{EmployeeCreate, EmployeeEnvelope, EmployeeListEnvelope, EmployeeResponse, EmployeeUpdate, ListEmployeesQuery};
use crate::db::errors::DbError;
use crate::db::handlers::{employees::EmployeeFilter, Employees, Repository};
use crate::db::models::employees::{EmployeeCreateDBRequest, EmployeeUpdateDBRequest};
use crate::errors::{Error, ErrorBody, Result};
use crate::validation::{unexpected_fields, validate_date, validate_email};
use crate::{AppState, types::EmployeeId};
use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Map, Value};

pub const INVALID_EMAIL: &str = "Invalid email format";
pub const INVALID_DOB: &str = "Invalid dob (date of birth) format. Use the format yyyy-mm-dd";
pub const UNEXPECTED_FIELDS: &str = "Unexpected request field(s)";
pub const INVALID_BODY: &str = "Invalid request body";

fn not_found(id: EmployeeId) -> Error {
    Error::NotFound {
        resource: "Employee".to_string(),
        id: id.to_string(),
    }
}

/// Email is checked before dob; the first failure wins. A missing email or dob is invalid.
fn validate_create(create: EmployeeCreate) -> Result<EmployeeCreateDBRequest> {
    let Some(email) = create.email.filter(|email| validate_email(email)) else {
        return Err(Error::bad_request(INVALID_EMAIL));
    };
    let Some(dob) = create.dob.filter(|dob| validate_date(dob)) else {
        return Err(Error::bad_request(INVALID_DOB));
    };

    Ok(EmployeeCreateDBRequest {
        first_name: create.first_name,
        last_name: create.last_name,
        role: create.role,
        email,
        dob,
    })
}

/// Turn a raw PATCH body into a patch, rejecting it before any store call when it is not
/// acceptable.
fn parse_patch(body: Map<String, Value>) -> Result<EmployeeUpdateDBRequest> {
    if !unexpected_fields(&body).is_empty() {
        return Err(Error::bad_request(UNEXPECTED_FIELDS));
    }

    let update: EmployeeUpdate = serde_json::from_value(Value::Object(body)).map_err(|_| Error::bad_request(INVALID_BODY))?;

    if update.email.as_deref().is_some_and(|email| !validate_email(email)) {
        return Err(Error::bad_request(INVALID_EMAIL));
    }
    if update.dob.as_deref().is_some_and(|dob| !validate_date(dob)) {
        return Err(Error::bad_request(INVALID_DOB));
    }

    let patch = EmployeeUpdateDBRequest::new(update);
    if patch.is_empty() {
        return Err(Error::bad_request(INVALID_BODY));
    }
    Ok(patch)
}

#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    summary = "List employees",
    params(ListEmployeesQuery),
    responses(
        (status = 200, description = "All employees, ordered by id", body = EmployeeListEnvelope),
        (status = 400, description = "Invalid query parameters", body = ErrorBody),
        (status = 500, description = "Unable to fetch employees", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_employees(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListEmployeesQuery>,
) -> Result<Json<EmployeeListEnvelope>> {
    let skip = query.skip.unwrap_or(0).max(0);
    let limit = query.limit.map(|limit| limit.max(0));

    let fetch_failed = |e: DbError| {
        tracing::error!("Failed to fetch employees: {:#}", e);
        Error::Internal {
            operation: "fetch employees".to_string(),
        }
    };

    let mut pool_conn = state.db.acquire().await.map_err(|e| fetch_failed(e.into()))?;
    let mut repo = Employees::new(&mut pool_conn);
    let employees = repo.list(&EmployeeFilter::new(skip, limit)).await.map_err(fetch_failed)?;

    Ok(Json(EmployeeListEnvelope {
        employees: employees.into_iter().map(EmployeeResponse::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "employees",
    summary = "Get employee",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee details", body = EmployeeEnvelope),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all, fields(employee_id))]
pub async fn get_employee(State(state): State<AppState>, ApiPath(id): ApiPath<EmployeeId>) -> Result<Json<EmployeeEnvelope>> {
    tracing::Span::current().record("employee_id", id);

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Employees::new(&mut pool_conn);

    match repo.get_by_id(id).await? {
        Some(employee) => Ok(Json(EmployeeEnvelope::from(employee))),
        None => Err(not_found(id)),
    }
}

#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    summary = "Create employee",
    request_body = EmployeeCreate,
    responses(
        (status = 201, description = "Employee created successfully", body = EmployeeEnvelope),
        (status = 400, description = "Invalid email or dob, or a body that is not an employee object", body = ErrorBody),
        (status = 500, description = "Store rejected the employee (missing name or role, duplicate email, impossible date)", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_employee(
    State(state): State<AppState>,
    ApiJson(create): ApiJson<EmployeeCreate>,
) -> Result<(StatusCode, Json<EmployeeEnvelope>)> {
    let request = validate_create(create)?;

    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;
    let employee;
    {
        let mut repo = Employees::new(&mut tx);
        employee = repo.create(&request).await?;
    }
    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    tracing::info!(employee_id = employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(EmployeeEnvelope::from(employee))))
}

#[utoipa::path(
    patch,
    path = "/employees/{id}",
    tag = "employees",
    summary = "Update employee",
    description = "Changes only the fields present in the body. Any key outside the employee fields rejects the whole request.",
    request_body = EmployeeUpdate,
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee updated successfully", body = EmployeeEnvelope),
        (status = 400, description = "Unexpected field, invalid email or dob, or empty body", body = ErrorBody),
        (status = 500, description = "Unable to update employee", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all, fields(employee_id))]
pub async fn update_employee(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<EmployeeId>,
    ApiJson(body): ApiJson<Map<String, Value>>,
) -> Result<Json<EmployeeEnvelope>> {
    tracing::Span::current().record("employee_id", id);

    let patch = parse_patch(body)?;

    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;
    let updated;
    {
        let mut repo = Employees::new(&mut tx);
        updated = repo.update(id, &patch).await;
    }
    let employee = match updated {
        Ok(employee) => employee,
        // No row matched: the update affected nothing
        Err(DbError::NotFound) => {
            return Err(Error::Internal {
                operation: "update employee".to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };
    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    Ok(Json(EmployeeEnvelope::from(employee)))
}

#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "employees",
    summary = "Delete employee",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "The employee that was deleted", body = EmployeeEnvelope),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all, fields(employee_id))]
pub async fn delete_employee(State(state): State<AppState>, ApiPath(id): ApiPath<EmployeeId>) -> Result<Json<EmployeeEnvelope>> {
    tracing::Span::current().record("employee_id", id);

    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;
    let employee;
    {
        let mut repo = Employees::new(&mut tx);
        employee = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if !repo.delete(id).await? {
            return Err(not_found(id));
        }
    }
    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    tracing::info!(employee_id = id, "Employee deleted");
    Ok(Json(EmployeeEnvelope::from(employee)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use serde_json::json;
    use sqlx::PgPool;

    async fn employee_count(pool: &PgPool) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employee")
            .fetch_one(pool)
            .await
            .expect("Failed to count employees")
    }

    #[test]
    fn patch_rejects_unexpected_fields_before_anything_else() {
        let body = json!({"email": "bad", "interest": "cycling"});
        let err = parse_patch(body.as_object().unwrap().clone()).unwrap_err();
        assert_eq!(err.user_message(), UNEXPECTED_FIELDS);
    }

    #[test]
    fn patch_checks_email_before_dob() {
        let body = json!({"email": "employee1@test", "dob": "1992-12-32"});
        let err = parse_patch(body.as_object().unwrap().clone()).unwrap_err();
        assert_eq!(err.user_message(), INVALID_EMAIL);
    }

    #[test]
    fn patch_with_only_id_is_empty() {
        let body = json!({"id": 7});
        let err = parse_patch(body.as_object().unwrap().clone()).unwrap_err();
        assert_eq!(err.user_message(), INVALID_BODY);
    }

    #[test]
    fn patch_with_wrongly_typed_value_is_invalid_body() {
        let body = json!({"first_name": 12});
        let err = parse_patch(body.as_object().unwrap().clone()).unwrap_err();
        assert_eq!(err.user_message(), INVALID_BODY);
    }

    #[test]
    fn create_checks_email_before_dob() {
        let create = EmployeeCreate {
            first_name: Some("Ola".to_string()),
            last_name: Some("Ige".to_string()),
            role: Some("janitor".to_string()),
            email: Some("ola.ige@test".to_string()),
            dob: Some("1997-04-32".to_string()),
        };
        let err = validate_create(create).unwrap_err();
        assert_eq!(err.user_message(), INVALID_EMAIL);
    }

    #[test]
    fn create_without_email_or_dob_is_invalid() {
        let err = validate_create(EmployeeCreate {
            dob: Some("1997-04-10".to_string()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.user_message(), INVALID_EMAIL);

        let err = validate_create(EmployeeCreate {
            email: Some("ola.ige@test.com".to_string()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.user_message(), INVALID_DOB);
    }

    #[test]
    fn create_passes_missing_names_through_to_the_store() {
        let request = validate_create(EmployeeCreate {
            role: Some("janitor".to_string()),
            email: Some("ola.ige@test.com".to_string()),
            dob: Some("1997-04-10".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert!(request.first_name.is_none());
        assert!(request.last_name.is_none());
        assert_eq!(request.email, "ola.ige@test.com");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_employee(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app
            .post("/employees")
            .json(&json!({
                "first_name": "Ola",
                "last_name": "Ige",
                "email": "ola.ige@test.com",
                "dob": "1997-04-10",
                "role": "janitor"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: EmployeeEnvelope = response.json();
        assert!(body.employee.id > 0);
        assert_eq!(body.employee.first_name, "Ola");
        assert_eq!(body.employee.last_name, "Ige");
        assert_eq!(body.employee.email, "ola.ige@test.com");
        assert_eq!(body.employee.role, "janitor");
        assert_eq!(body.employee.dob.to_string(), "1997-04-10");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_employee_invalid_email(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app
            .post("/employees")
            .json(&json!({
                "first_name": "Ola",
                "last_name": "Ige",
                "email": "ola.ige@test",
                "dob": "1997-04-10",
                "role": "janitor"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.message, INVALID_EMAIL);
        assert_eq!(employee_count(&pool).await, 0);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_employee_invalid_dob(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app
            .post("/employees")
            .json(&json!({
                "first_name": "Ola",
                "last_name": "Ige",
                "email": "ola.ige@test.com",
                "dob": "1997-04-32",
                "role": "janitor"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.message, INVALID_DOB);
        assert_eq!(employee_count(&pool).await, 0);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_employee_missing_field(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        for missing in ["first_name", "last_name", "role"] {
            let mut body = json!({
                "first_name": "Ola",
                "last_name": "Ige",
                "email": "ola.ige@test.com",
                "dob": "1997-04-10",
                "role": "janitor"
            });
            body.as_object_mut().unwrap().remove(missing);

            let response = app.post("/employees").json(&body).await;
            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
            let error: ErrorBody = response.json();
            assert!(error.message.contains("null value"), "unexpected message: {}", error.message);
            assert!(error.message.contains(missing), "unexpected message: {}", error.message);
        }
        assert_eq!(employee_count(&pool).await, 0);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_employee_null_field(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app
            .post("/employees")
            .json(&json!({
                "first_name": null,
                "last_name": "Ige",
                "email": "ola.ige@test.com",
                "dob": "1997-04-10",
                "role": "janitor"
            }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(employee_count(&pool).await, 0);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_employee_missing_email(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app
            .post("/employees")
            .json(&json!({
                "first_name": "Ola",
                "last_name": "Ige",
                "dob": "1997-04-10",
                "role": "janitor"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.message, INVALID_EMAIL);
        assert_eq!(employee_count(&pool).await, 0);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_employee_impossible_date_is_store_error(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        // Right shape, but April has no 31st
        let response = app
            .post("/employees")
            .json(&json!({
                "first_name": "Ola",
                "last_name": "Ige",
                "email": "ola.ige@test.com",
                "dob": "1997-04-31",
                "role": "janitor"
            }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(employee_count(&pool).await, 0);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_employee_duplicate_email(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let existing = create_test_employee(&pool).await;

        let response = app
            .post("/employees")
            .json(&json!({
                "first_name": "Ola",
                "last_name": "Ige",
                "email": existing.email,
                "dob": "1997-04-10",
                "role": "janitor"
            }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = response.json();
        assert!(body.message.contains("employee_email_key"), "unexpected message: {}", body.message);
        assert_eq!(employee_count(&pool).await, 1);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_employees(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app.get("/employees").await;
        response.assert_status_ok();
        let body: EmployeeListEnvelope = response.json();
        assert!(body.employees.is_empty());

        let seeded = create_test_employee(&pool).await;

        let response = app.get("/employees").await;
        response.assert_status_ok();
        let body: EmployeeListEnvelope = response.json();
        assert_eq!(body.employees, vec![seeded]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_employees_with_pagination(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        for i in 0..4 {
            create_test_employee_with_email(&pool, &format!("employee{i}@test.com")).await;
        }

        let response = app.get("/employees?skip=1&limit=2").await;
        response.assert_status_ok();
        let body: EmployeeListEnvelope = response.json();
        assert_eq!(body.employees.len(), 2);
        assert_eq!(body.employees[0].email, "employee1@test.com");

        let response = app.get("/employees?limit=abc").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_employee(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let seeded = create_test_employee(&pool).await;

        let response = app.get(&format!("/employees/{}", seeded.id)).await;
        response.assert_status_ok();
        let body: EmployeeEnvelope = response.json();
        assert_eq!(body.employee, seeded);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_employee_not_found(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let seeded = create_test_employee(&pool).await;

        let response = app.get(&format!("/employees/{}", seeded.id + 1)).await;
        response.assert_status_not_found();
        let body: ErrorBody = response.json();
        assert_eq!(body.message, "Not found");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_employee_non_numeric_id(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app.get("/employees/abc").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert!(body.message.starts_with("Invalid path parameter"));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_employee(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let seeded = create_test_employee(&pool).await;

        let response = app
            .patch(&format!("/employees/{}", seeded.id))
            .json(&json!({"first_name": "Biyi", "last_name": "Olu"}))
            .await;

        response.assert_status_ok();
        let body: EmployeeEnvelope = response.json();
        assert_eq!(body.employee.id, seeded.id);
        assert_eq!(body.employee.first_name, "Biyi");
        assert_eq!(body.employee.last_name, "Olu");
        assert_eq!(body.employee.email, seeded.email);
        assert_eq!(body.employee.role, seeded.role);
        assert_eq!(body.employee.dob, seeded.dob);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_single_field_leaves_others(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let seeded = create_test_employee(&pool).await;

        let response = app
            .patch(&format!("/employees/{}", seeded.id))
            .json(&json!({"first_name": "Biyi"}))
            .await;

        response.assert_status_ok();
        let body: EmployeeEnvelope = response.json();
        assert_eq!(
            body.employee,
            EmployeeResponse {
                first_name: "Biyi".to_string(),
                ..seeded.clone()
            }
        );

        // The change is persisted
        let response = app.get(&format!("/employees/{}", seeded.id)).await;
        let body: EmployeeEnvelope = response.json();
        assert_eq!(body.employee.first_name, "Biyi");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_employee_not_found(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app.patch("/employees/999").json(&json!({"first_name": "Biyi"})).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = response.json();
        assert_eq!(body.message, "Unable to update employee");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_employee_invalid_email(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let seeded = create_test_employee(&pool).await;

        let response = app
            .patch(&format!("/employees/{}", seeded.id))
            .json(&json!({"email": "employee1@test"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.message, INVALID_EMAIL);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_employee_invalid_dob(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let seeded = create_test_employee(&pool).await;

        let response = app
            .patch(&format!("/employees/{}", seeded.id))
            .json(&json!({"dob": "1992-12-32"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.message, INVALID_DOB);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_employee_unexpected_field(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let seeded = create_test_employee(&pool).await;

        let response = app
            .patch(&format!("/employees/{}", seeded.id))
            .json(&json!({"first_name": "Biyi", "last_name": "Olu", "interest": "cycling"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.message, UNEXPECTED_FIELDS);

        // Nothing was written
        let response = app.get(&format!("/employees/{}", seeded.id)).await;
        let body: EmployeeEnvelope = response.json();
        assert_eq!(body.employee, seeded);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_employee_empty_body(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let seeded = create_test_employee(&pool).await;

        let response = app.patch(&format!("/employees/{}", seeded.id)).json(&json!({})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.message, INVALID_BODY);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_employee_duplicate_email_rolls_back(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let first = create_test_employee(&pool).await;
        let second = create_test_employee_with_email(&pool, "second@test.com").await;

        let response = app
            .patch(&format!("/employees/{}", second.id))
            .json(&json!({"email": first.email, "role": "manager"}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let response = app.get(&format!("/employees/{}", second.id)).await;
        let body: EmployeeEnvelope = response.json();
        assert_eq!(body.employee, second);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_delete_employee(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;
        let seeded = create_test_employee(&pool).await;

        let response = app.delete(&format!("/employees/{}", seeded.id)).await;
        response.assert_status_ok();
        let body: EmployeeEnvelope = response.json();
        assert_eq!(body.employee, seeded);

        let response = app.get(&format!("/employees/{}", seeded.id)).await;
        response.assert_status_not_found();
        assert_eq!(employee_count(&pool).await, 0);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_delete_employee_not_found(pool: PgPool) {
        let app = create_test_app(pool.clone()).await;

        let response = app.delete("/employees/2").await;
        response.assert_status_not_found();
        let body: ErrorBody = response.json();
        assert_eq!(body.message, "Not found");
    }
}
