//! Handlers for the record endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/profesores` | Body: [`NewProfessor`]; 201 + full view |
//! | `GET`  | `/profesores` | Simple views |
//! | `GET`  | `/profesores/activos` | Simple views, active only |
//! | `GET`  | `/profesores/inactivos` | Simple views, inactive only |
//! | `GET`  | `/profesores/{id}` | 404 if not found |
//! | `GET`  | `/profesores/numero-empleado/{n}` | 404 if not found |
//! | `PUT`  | `/profesores/{id}` | Body: [`ProfessorPatch`]; 400 on any failure |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use profesores_core::{
  ProfessorService,
  professor::{NewProfessor, ProfessorPatch, ProfessorSummary, ProfessorView},
  store::ProfessorStore,
};

use crate::{
  error::ApiError,
  extract::{JsonBody, ProfessorId},
};

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /profesores`
pub async fn create<S>(
  State(service): State<ProfessorService<S>>,
  JsonBody(body): JsonBody<NewProfessor>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ProfessorStore,
{
  let view = service.create(body).await.map_err(ApiError::rejected)?;
  Ok((StatusCode::CREATED, Json(view)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /profesores`
pub async fn list_all<S>(
  State(service): State<ProfessorService<S>>,
) -> Result<Json<Vec<ProfessorSummary>>, ApiError>
where
  S: ProfessorStore,
{
  Ok(Json(service.list_all().await.map_err(ApiError::lookup)?))
}

/// `GET /profesores/activos`
pub async fn list_active<S>(
  State(service): State<ProfessorService<S>>,
) -> Result<Json<Vec<ProfessorSummary>>, ApiError>
where
  S: ProfessorStore,
{
  Ok(Json(service.list_active().await.map_err(ApiError::lookup)?))
}

/// `GET /profesores/inactivos`
pub async fn list_inactive<S>(
  State(service): State<ProfessorService<S>>,
) -> Result<Json<Vec<ProfessorSummary>>, ApiError>
where
  S: ProfessorStore,
{
  Ok(Json(service.list_inactive().await.map_err(ApiError::lookup)?))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /profesores/{id}`
pub async fn get_one<S>(
  State(service): State<ProfessorService<S>>,
  ProfessorId(id): ProfessorId,
) -> Result<Json<ProfessorView>, ApiError>
where
  S: ProfessorStore,
{
  let view = service
    .get_by_id(id)
    .await
    .map_err(|e| ApiError::lookup(e).with("id", id))?;
  Ok(Json(view))
}

/// `GET /profesores/numero-empleado/{numero_empleado}`
pub async fn get_by_employee_number<S>(
  State(service): State<ProfessorService<S>>,
  Path(employee_number): Path<String>,
) -> Result<Json<ProfessorView>, ApiError>
where
  S: ProfessorStore,
{
  let view = service
    .get_by_employee_number(&employee_number)
    .await
    .map_err(|e| ApiError::lookup(e).with("numeroEmpleado", employee_number.clone()))?;
  Ok(Json(view))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /profesores/{id}`: only the keys present in the body are applied.
pub async fn update<S>(
  State(service): State<ProfessorService<S>>,
  ProfessorId(id): ProfessorId,
  JsonBody(patch): JsonBody<ProfessorPatch>,
) -> Result<Json<ProfessorView>, ApiError>
where
  S: ProfessorStore,
{
  let view = service
    .update(id, patch)
    .await
    .map_err(|e| ApiError::rejected(e).with("id", id))?;
  Ok(Json(view))
}
