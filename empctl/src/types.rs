//! Common type definitions.
//!
//! Entity IDs are wrapped in type aliases so signatures say what they carry.
//! Employees use the `BIGSERIAL` primary key assigned by PostgreSQL.

// Type aliases for IDs
pub type EmployeeId = i64;
