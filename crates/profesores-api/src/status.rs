//! Statistics and liveness.

use axum::{Json, extract::State};
use profesores_core::{ProfessorService, store::ProfessorStore};
use serde::Serialize;

use crate::{error::ApiError, timestamp};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveCount {
  pub total_activos: u64,
  pub timestamp:     i64,
}

/// `GET /profesores/estadisticas/activos`
pub async fn count_active<S>(
  State(service): State<ProfessorService<S>>,
) -> Result<Json<ActiveCount>, ApiError>
where
  S: ProfessorStore,
{
  let total_activos = service.count_active().await.map_err(ApiError::lookup)?;
  Ok(Json(ActiveCount { total_activos, timestamp: timestamp() }))
}

/// Static liveness payload. No dependency is checked. All values are
/// strings, `timestamp` included.
#[derive(Debug, Serialize)]
pub struct Health {
  pub status:    &'static str,
  pub servicio:  &'static str,
  pub version:   &'static str,
  pub timestamp: String,
}

/// `GET /profesores/health`
pub async fn health() -> Json<Health> {
  Json(Health {
    status:    "UP",
    servicio:  "Microservicio de Profesores",
    version:   env!("CARGO_PKG_VERSION"),
    timestamp: timestamp().to_string(),
  })
}
