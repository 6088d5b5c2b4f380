//! Extractor wrappers whose rejections render as [`AppError`] envelopes.
//!
//! Use these instead of `axum::extract::Path` and `axum::Json` so that a
//! non-numeric id yields `404 Not found` and a malformed body yields a 400,
//! both in the usual `{results, message}` shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::extract::Path` with an [`AppError`] rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// `axum::Json` with an [`AppError`] rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
