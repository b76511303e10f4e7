//! Extractors whose rejections render as [`crate::errors::Error`].
//!
//! Axum's stock `Json`, `Path` and `Query` reject with plain-text bodies. Wrapping them keeps
//! every failure on the `{message}` JSON shape.

use crate::errors::Error;
use axum::extract::{FromRequest, FromRequestParts};

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ApiPath<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct ApiQuery<T>(pub T);
