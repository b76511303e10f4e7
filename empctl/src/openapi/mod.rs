//! OpenAPI documentation for the employee API.
//!
//! The document is served as JSON at `/api-docs/openapi.json` and rendered with Scalar at `/docs`.

use utoipa::OpenApi;

use crate::{api, errors};

/// Liveness check.
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, description = "The service is up", body = String, content_type = "text/plain")
    )
)]
#[allow(unused)]
fn healthz() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz,
        api::handlers::employees::list_employees,
        api::handlers::employees::get_employee,
        api::handlers::employees::create_employee,
        api::handlers::employees::update_employee,
        api::handlers::employees::delete_employee,
    ),
    components(
        schemas(
            api::models::employees::EmployeeCreate,
            api::models::employees::EmployeeUpdate,
            api::models::employees::EmployeeResponse,
            api::models::employees::EmployeeEnvelope,
            api::models::employees::EmployeeListEnvelope,
            api::models::employees::ListEmployeesQuery,
            errors::ErrorBody,
        )
    ),
    tags(
        (name = "employees", description = "Create, read, update and delete employee records.

Every employee has a server-assigned `id`, a unique `email` and a date of birth (`dob`) in `YYYY-MM-DD` form."),
        (name = "health", description = "Service liveness."),
    ),
    info(
        title = "Employee API",
        version = "1.0.0",
        description = "REST API for managing employee records.

## Errors

Every error response carries a JSON body with a single `message` field:

```json
{ \"message\": \"Invalid email format\" }
```

Validation failures return `400`, unknown ids return `404` and storage failures return `500`.",
    ),
)]
pub struct ApiDoc;
