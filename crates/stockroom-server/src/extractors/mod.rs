//! Request extractors
//!
//! Thin wrappers over axum's `Json`, `Form` and `Path` whose rejections
//! become `AppError::BadRequest`, so malformed input is answered with a 400
//! and the same JSON error body as every other failure.

use crate::error::AppError;
use axum::extract::{FromRequest, FromRequestParts};

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct AppForm<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
