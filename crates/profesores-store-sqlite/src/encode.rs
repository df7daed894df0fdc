//! Mapping between `profesores` rows and [`Professor`].
//!
//! `activo` is stored as `INTEGER` 0/1 and read back through rusqlite's
//! `bool` conversion. Nullable columns map to `Option<String>`.

use profesores_core::professor::Professor;
use rusqlite::Row;

/// Column list shared by every `SELECT` / `RETURNING`, in [`decode_row`]
/// order.
pub const COLUMNS: &str = "id, numero_empleado, nombre, apellido_paterno, apellido_materno, \
                           email, telefono, activo";

pub fn decode_row(row: &Row<'_>) -> rusqlite::Result<Professor> {
  Ok(Professor {
    id:               row.get(0)?,
    employee_number:  row.get(1)?,
    first_name:       row.get(2)?,
    paternal_surname: row.get(3)?,
    maternal_surname: row.get(4)?,
    email:            row.get(5)?,
    phone:            row.get(6)?,
    active:           row.get(7)?,
  })
}
