//! Error types for `profesores-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("Profesor no encontrado con ID: {0}")]
  NotFound(i64),

  #[error("Profesor no encontrado con número de empleado: {0}")]
  EmployeeNumberNotFound(String),

  #[error("Ya existe un profesor con el número de empleado: {0}")]
  DuplicateEmployeeNumber(String),

  #[error("Ya existe un profesor con el email: {0}")]
  DuplicateEmail(String),

  #[error("El email ya está en uso: {0}")]
  EmailInUse(String),

  #[error("{0}")]
  Validation(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Both lookup failures (by id and by employee number).
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::NotFound(_) | Self::EmployeeNumberNotFound(_))
  }

  /// Failures caused by the storage backend rather than by the request.
  pub fn is_store(&self) -> bool { matches!(self, Self::Store(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
