//! Error type for `profesores-store-sqlite`.

use profesores_core::store::{StoreError, UniqueField};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[source] tokio_rusqlite::Error),

  #[error("unique constraint failed on {0:?}")]
  UniqueViolation(UniqueField),

  /// `save` was called for an id with no row.
  #[error("professor row not found: {0}")]
  RowNotFound(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl StoreError for Error {
  fn unique_violation(&self) -> Option<UniqueField> {
    match self {
      Self::UniqueViolation(field) => Some(*field),
      _ => None,
    }
  }
}

impl From<tokio_rusqlite::Error> for Error {
  fn from(e: tokio_rusqlite::Error) -> Self {
    if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(code, Some(msg))) = &e
      && code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
      && let Some(field) = unique_field(msg)
    {
      return Self::UniqueViolation(field);
    }
    Self::Database(e)
  }
}

/// Map `UNIQUE constraint failed: profesores.<column>` to the field.
fn unique_field(msg: &str) -> Option<UniqueField> {
  if msg.contains("profesores.numero_empleado") {
    Some(UniqueField::EmployeeNumber)
  } else if msg.contains("profesores.email") {
    Some(UniqueField::Email)
  } else {
    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unique_field_from_sqlite_message() {
    assert_eq!(
      unique_field("UNIQUE constraint failed: profesores.numero_empleado"),
      Some(UniqueField::EmployeeNumber)
    );
    assert_eq!(
      unique_field("UNIQUE constraint failed: profesores.email"),
      Some(UniqueField::Email)
    );
    assert_eq!(unique_field("NOT NULL constraint failed: profesores.nombre"), None);
  }

  #[test]
  fn only_unique_violations_are_classified() {
    assert_eq!(
      Error::UniqueViolation(UniqueField::Email).unique_violation(),
      Some(UniqueField::Email)
    );
    assert_eq!(Error::RowNotFound(3).unique_violation(), None);
  }
}
