//! [`SqliteStore`], the SQLite implementation of [`ProfessorStore`].

use std::path::Path;

use profesores_core::{
  professor::{NewProfessor, Professor},
  store::ProfessorStore,
};
use rusqlite::{OptionalExtension as _, types::Value};
use tracing::debug;

use crate::{
  Error, Result,
  encode::{COLUMNS, decode_row},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A professor store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    debug!(path = %path.as_ref().display(), "opening sqlite store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests and throwaway runs.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// First row where `column = value`. `column` is always a literal from
  /// this module, never caller input.
  async fn select_one(&self, column: &'static str, value: Value) -> Result<Option<Professor>> {
    let found = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT {COLUMNS} FROM profesores WHERE {column} = ?1");
        Ok(conn.query_row(&sql, rusqlite::params![value], decode_row).optional()?)
      })
      .await?;
    Ok(found)
  }

  async fn exists(&self, column: &'static str, value: Value) -> Result<bool> {
    let exists = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT EXISTS (SELECT 1 FROM profesores WHERE {column} = ?1)");
        Ok(conn.query_row(&sql, rusqlite::params![value], |row| row.get(0))?)
      })
      .await?;
    Ok(exists)
  }

  /// All rows ordered by id, optionally filtered on `activo`.
  async fn select_many(&self, active: Option<bool>) -> Result<Vec<Professor>> {
    let rows = self
      .conn
      .call(move |conn| {
        let rows = if let Some(a) = active {
          let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM profesores WHERE activo = ?1 ORDER BY id"
          ))?;
          stmt
            .query_map(rusqlite::params![a], decode_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt =
            conn.prepare(&format!("SELECT {COLUMNS} FROM profesores ORDER BY id"))?;
          stmt
            .query_map([], decode_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}

// ─── ProfessorStore impl ─────────────────────────────────────────────────────

impl ProfessorStore for SqliteStore {
  type Error = Error;

  // ── Lookups ───────────────────────────────────────────────────────────────

  async fn find_by_id(&self, id: i64) -> Result<Option<Professor>> {
    self.select_one("id", Value::Integer(id)).await
  }

  async fn find_by_employee_number(&self, employee_number: &str) -> Result<Option<Professor>> {
    self
      .select_one("numero_empleado", Value::Text(employee_number.to_owned()))
      .await
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<Professor>> {
    self.select_one("email", Value::Text(email.to_owned())).await
  }

  async fn exists_by_id(&self, id: i64) -> Result<bool> {
    self.exists("id", Value::Integer(id)).await
  }

  async fn exists_by_employee_number(&self, employee_number: &str) -> Result<bool> {
    self
      .exists("numero_empleado", Value::Text(employee_number.to_owned()))
      .await
  }

  async fn exists_by_email(&self, email: &str) -> Result<bool> {
    self.exists("email", Value::Text(email.to_owned())).await
  }

  // ── Listings ──────────────────────────────────────────────────────────────

  async fn find_all(&self) -> Result<Vec<Professor>> { self.select_many(None).await }

  async fn find_all_active(&self) -> Result<Vec<Professor>> {
    self.select_many(Some(true)).await
  }

  async fn find_all_inactive(&self) -> Result<Vec<Professor>> {
    self.select_many(Some(false)).await
  }

  async fn count_active(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row(
          "SELECT COUNT(*) FROM profesores WHERE activo = 1",
          [],
          |row| row.get(0),
        )?)
      })
      .await?;
    Ok(count.max(0) as u64)
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn insert(&self, input: NewProfessor) -> Result<Professor> {
    let NewProfessor {
      employee_number,
      first_name,
      paternal_surname,
      maternal_surname,
      email,
      phone,
    } = input;

    let professor = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "INSERT INTO profesores (
             numero_empleado, nombre, apellido_paterno, apellido_materno,
             email, telefono, activo
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1)
           RETURNING {COLUMNS}"
        );
        Ok(conn.query_row(
          &sql,
          rusqlite::params![
            employee_number,
            first_name,
            paternal_surname,
            maternal_surname,
            email,
            phone,
          ],
          decode_row,
        )?)
      })
      .await?;

    debug!(id = professor.id, "inserted professor row");
    Ok(professor)
  }

  async fn save(&self, professor: Professor) -> Result<Professor> {
    let id = professor.id;
    let saved = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "UPDATE profesores SET
             numero_empleado  = ?2,
             nombre           = ?3,
             apellido_paterno = ?4,
             apellido_materno = ?5,
             email            = ?6,
             telefono         = ?7,
             activo           = ?8
           WHERE id = ?1
           RETURNING {COLUMNS}"
        );
        Ok(conn
          .query_row(
            &sql,
            rusqlite::params![
              professor.id,
              professor.employee_number,
              professor.first_name,
              professor.paternal_surname,
              professor.maternal_surname,
              professor.email,
              professor.phone,
              professor.active,
            ],
            decode_row,
          )
          .optional()?)
      })
      .await?;

    saved.ok_or(Error::RowNotFound(id))
  }

  async fn delete_by_id(&self, id: i64) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM profesores WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(removed > 0)
  }
}
