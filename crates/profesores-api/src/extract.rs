//! Extractors whose rejections use the [`ApiError`] body instead of axum's
//! plain-text defaults.

use axum::{
  Json,
  extract::{FromRequest, FromRequestParts, Path, Request},
  http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// The numeric `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct ProfessorId(pub i64);

impl<S> FromRequestParts<S> for ProfessorId
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
    let Path(id) = Path::<i64>::from_request_parts(parts, state)
      .await
      .map_err(|e| ApiError::bad_request(e.body_text()))?;
    Ok(Self(id))
  }
}

/// A JSON request body. Malformed or incomplete bodies are `400`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
  S: Send + Sync,
  T: DeserializeOwned,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let Json(value) = Json::<T>::from_request(req, state)
      .await
      .map_err(|e| ApiError::bad_request(e.body_text()))?;
    Ok(Self(value))
  }
}
