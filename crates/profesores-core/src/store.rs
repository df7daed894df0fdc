//! The `ProfessorStore` trait.
//!
//! Implemented by storage backends (e.g. `profesores-store-sqlite`). The
//! service layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::professor::{NewProfessor, Professor};

/// A column protected by a unique constraint in the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
  EmployeeNumber,
  Email,
}

/// Errors produced by a [`ProfessorStore`].
///
/// The store is the final authority on uniqueness: when a write loses a race
/// against a concurrent writer, the backend reports which constraint fired so
/// the service can answer with the same error a pre-check would have given.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// `Some` if this error is a unique-constraint violation.
  fn unique_violation(&self) -> Option<UniqueField>;
}

/// Abstraction over a professor store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ProfessorStore: Send + Sync {
  type Error: StoreError;

  // ── Lookups ───────────────────────────────────────────────────────────

  fn find_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Professor>, Self::Error>> + Send + '_;

  fn find_by_employee_number<'a>(
    &'a self,
    employee_number: &'a str,
  ) -> impl Future<Output = Result<Option<Professor>, Self::Error>> + Send + 'a;

  fn find_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<Professor>, Self::Error>> + Send + 'a;

  fn exists_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  fn exists_by_employee_number<'a>(
    &'a self,
    employee_number: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  fn exists_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  // ── Listings ──────────────────────────────────────────────────────────

  /// Every record, ordered by id.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Professor>, Self::Error>> + Send + '_;

  /// Records with `active = true`, ordered by id.
  fn find_all_active(
    &self,
  ) -> impl Future<Output = Result<Vec<Professor>, Self::Error>> + Send + '_;

  /// Records with `active = false`, ordered by id.
  fn find_all_inactive(
    &self,
  ) -> impl Future<Output = Result<Vec<Professor>, Self::Error>> + Send + '_;

  fn count_active(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Insert a new record with `active = true` and return it with the
  /// store-assigned id.
  fn insert(
    &self,
    input: NewProfessor,
  ) -> impl Future<Output = Result<Professor, Self::Error>> + Send + '_;

  /// Overwrite the row identified by `professor.id` and return the
  /// persisted record.
  fn save(
    &self,
    professor: Professor,
  ) -> impl Future<Output = Result<Professor, Self::Error>> + Send + '_;

  /// Remove a record. Returns `false` if no row matched; callers are expected
  /// to have checked existence beforehand.
  fn delete_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
