//! Shape validation for employee input.
//!
//! These are regex-level format checks, not semantic ones: a date such as `1997-04-31` has a
//! valid shape and passes here. PostgreSQL rejects it when the value is cast to `DATE`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$").expect("valid date regex"));

/// Every key an employee body may carry. `id` is accepted but never written.
pub const EMPLOYEE_FIELDS: [&str; 6] = ["id", "first_name", "last_name", "role", "email", "dob"];

/// Local part, `@`, a domain, and a dotted top-level label.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// `YYYY-MM-DD` with month 01-12 and day 01-31.
pub fn validate_date(date: &str) -> bool {
    DATE_RE.is_match(date)
}

/// Keys of `body` that are not employee fields.
pub fn unexpected_fields(body: &Map<String, Value>) -> Vec<&str> {
    body.keys()
        .map(String::as_str)
        .filter(|key| !EMPLOYEE_FIELDS.contains(key))
        .collect()
}
