//! JSON REST API for the professor registry.
//!
//! Exposes an axum [`Router`] backed by a [`ProfessorService`] over any
//! [`ProfessorStore`]. Transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", profesores_api::api_router(service))
//! ```

pub mod error;
pub mod extract;
pub mod lifecycle;
pub mod professors;
pub mod status;

use axum::{
  Router,
  routing::{get, patch},
};
use profesores_core::{ProfessorService, store::ProfessorStore};
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Build the `/profesores` router for `service`.
///
/// Any origin may call the API. The returned `Router<()>` can be nested into
/// any parent router regardless of its own state type.
pub fn api_router<S>(service: ProfessorService<S>) -> Router<()>
where
  S: ProfessorStore + 'static,
{
  Router::new()
    // Collection
    .route(
      "/profesores",
      get(professors::list_all::<S>).post(professors::create::<S>),
    )
    .route("/profesores/activos", get(professors::list_active::<S>))
    .route("/profesores/inactivos", get(professors::list_inactive::<S>))
    .route(
      "/profesores/numero-empleado/{numero_empleado}",
      get(professors::get_by_employee_number::<S>),
    )
    // Single record
    .route(
      "/profesores/{id}",
      get(professors::get_one::<S>)
        .put(professors::update::<S>)
        .delete(lifecycle::delete_one::<S>),
    )
    .route("/profesores/{id}/desactivar", patch(lifecycle::deactivate::<S>))
    .route("/profesores/{id}/activar", patch(lifecycle::activate::<S>))
    // Status
    .route("/profesores/estadisticas/activos", get(status::count_active::<S>))
    .route("/profesores/health", get(status::health))
    .layer(CorsLayer::permissive())
    .with_state(service)
}

/// Milliseconds since the Unix epoch, stamped on every response body that
/// carries a `timestamp`.
pub(crate) fn timestamp() -> i64 { chrono::Utc::now().timestamp_millis() }
