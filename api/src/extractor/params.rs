use axum::extract::{FromRequestParts, Path as AxumPath, Query as AxumQuery};

use crate::error::ApiError;

/// `axum::extract::Path` rejecting malformed segments as a 400 in the API
/// error format.
#[derive(FromRequestParts)]
#[from_request(via(AxumPath), rejection(ApiError))]
pub struct Path<T>(pub T);

/// `axum::extract::Query` with the same rejection handling as [`Path`].
#[derive(FromRequestParts)]
#[from_request(via(AxumQuery), rejection(ApiError))]
pub struct Query<T>(pub T);
