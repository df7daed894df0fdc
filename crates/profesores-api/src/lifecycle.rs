//! Handlers that change a record's lifecycle without returning it.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `PATCH`  | `/profesores/{id}/desactivar` | Soft delete |
//! | `PATCH`  | `/profesores/{id}/activar` | Undo soft delete |
//! | `DELETE` | `/profesores/{id}` | Physical removal |
//!
//! Success bodies are `{"mensaje", "id", "timestamp"}`; every failure is 400.

use axum::{Json, extract::State};
use profesores_core::{ProfessorService, store::ProfessorStore};
use serde::Serialize;

use crate::{error::ApiError, extract::ProfessorId, timestamp};

/// Acknowledgement for an action with no natural return value.
#[derive(Debug, Serialize)]
pub struct Ack {
  pub mensaje:   &'static str,
  pub id:        i64,
  pub timestamp: i64,
}

impl Ack {
  fn new(mensaje: &'static str, id: i64) -> Self {
    Self { mensaje, id, timestamp: timestamp() }
  }
}

/// `PATCH /profesores/{id}/desactivar`
pub async fn deactivate<S>(
  State(service): State<ProfessorService<S>>,
  ProfessorId(id): ProfessorId,
) -> Result<Json<Ack>, ApiError>
where
  S: ProfessorStore,
{
  service
    .deactivate(id)
    .await
    .map_err(|e| ApiError::rejected(e).with("id", id))?;
  Ok(Json(Ack::new("Profesor desactivado correctamente", id)))
}

/// `PATCH /profesores/{id}/activar`
pub async fn activate<S>(
  State(service): State<ProfessorService<S>>,
  ProfessorId(id): ProfessorId,
) -> Result<Json<Ack>, ApiError>
where
  S: ProfessorStore,
{
  service
    .activate(id)
    .await
    .map_err(|e| ApiError::rejected(e).with("id", id))?;
  Ok(Json(Ack::new("Profesor activado correctamente", id)))
}

/// `DELETE /profesores/{id}`
pub async fn delete_one<S>(
  State(service): State<ProfessorService<S>>,
  ProfessorId(id): ProfessorId,
) -> Result<Json<Ack>, ApiError>
where
  S: ProfessorStore,
{
  service
    .delete(id)
    .await
    .map_err(|e| ApiError::rejected(e).with("id", id))?;
  Ok(Json(Ack::new("Profesor eliminado permanentemente", id)))
}
