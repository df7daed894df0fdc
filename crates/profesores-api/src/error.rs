//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error body has the shape `{"error": <message>, ..context, "timestamp":
//! <epoch ms>}` where the context echoes the identifier the request named.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::error;

use crate::timestamp;

/// An error returned by an API handler.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
  status:  StatusCode,
  message: String,
  context: Vec<(&'static str, Value)>,
}

impl ApiError {
  pub fn bad_request(message: impl Into<String>) -> Self {
    Self {
      status:  StatusCode::BAD_REQUEST,
      message: message.into(),
      context: Vec::new(),
    }
  }

  /// For read endpoints: a missing record is `404`.
  pub fn lookup(e: profesores_core::Error) -> Self { Self::classify(e, StatusCode::NOT_FOUND) }

  /// For write endpoints: every business failure, a missing record included,
  /// is `400`.
  pub fn rejected(e: profesores_core::Error) -> Self {
    Self::classify(e, StatusCode::BAD_REQUEST)
  }

  /// Echo an identifier from the request in the error body.
  pub fn with(mut self, key: &'static str, value: impl Into<Value>) -> Self {
    self.context.push((key, value.into()));
    self
  }

  #[cfg(test)]
  pub(crate) fn status(&self) -> StatusCode { self.status }

  fn classify(e: profesores_core::Error, not_found: StatusCode) -> Self {
    let status = if e.is_store() {
      error!(error = %e, "request failed in the store");
      StatusCode::INTERNAL_SERVER_ERROR
    } else if e.is_not_found() {
      not_found
    } else {
      StatusCode::BAD_REQUEST
    };
    Self {
      status,
      message: e.to_string(),
      context: Vec::new(),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let mut body = Map::new();
    body.insert("error".into(), Value::String(self.message));
    for (key, value) in self.context {
      body.insert(key.into(), value);
    }
    body.insert("timestamp".into(), timestamp().into());
    (self.status, Json(Value::Object(body))).into_response()
  }
}
