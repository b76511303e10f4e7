//! Test utilities shared by the handler and application tests.

use crate::api::models::employees::EmployeeResponse;
use crate::config::{Config, PoolSettings};
use crate::db::handlers::{Employees, Repository};
use crate::db::models::employees::EmployeeCreateDBRequest;
use axum_test::TestServer;
use sqlx::PgPool;

pub async fn create_test_app(pool: PgPool) -> TestServer {
    let config = create_test_config();

    let app = crate::Application::new_with_pool(config, pool)
        .await
        .expect("Failed to create application");

    app.into_test_server()
}

pub fn create_test_config() -> Config {
    let mut config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..Default::default()
    };
    // Will get overridden by the pool handed in by sqlx::test
    config.database.url = "Something".to_string();
    config.database.pool = PoolSettings {
        max_connections: 2,
        min_connections: 0,
        ..Default::default()
    };
    config
}

pub async fn create_test_employee(pool: &PgPool) -> EmployeeResponse {
    create_test_employee_with_email(pool, "employee1@test.com").await
}

pub async fn create_test_employee_with_email(pool: &PgPool, email: &str) -> EmployeeResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut repo = Employees::new(&mut conn);

    let request = EmployeeCreateDBRequest {
        first_name: Some("Ade".to_string()),
        last_name: Some("Ayo".to_string()),
        role: Some("cashier".to_string()),
        email: email.to_string(),
        dob: "1995-02-25".to_string(),
    };

    repo.create(&request)
        .await
        .expect("Failed to create test employee")
        .into()
}
