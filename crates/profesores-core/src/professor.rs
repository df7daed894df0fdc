//! The professor record and its transfer shapes.
//!
//! [`Professor`] is what the store persists. Requests arrive as
//! [`NewProfessor`] / [`ProfessorPatch`]; responses leave as
//! [`ProfessorView`] (full) or [`ProfessorSummary`] (list entries). JSON keys
//! are the public Spanish names of the API.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, patch::Patch};

// ─── Column limits ───────────────────────────────────────────────────────────

pub const EMPLOYEE_NUMBER_MAX: usize = 20;
pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 150;
pub const PHONE_MAX: usize = 15;

// ─── Stored record ───────────────────────────────────────────────────────────

/// A persisted professor. `id` is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Professor {
  pub id:               i64,
  pub employee_number:  String,
  pub first_name:       String,
  pub paternal_surname: String,
  pub maternal_surname: Option<String>,
  pub email:            String,
  pub phone:            Option<String>,
  pub active:           bool,
}

impl Professor {
  /// Display name exposed as `nombreCompleto`. Only the first name, as the
  /// API has always published it.
  pub fn full_name(&self) -> &str { &self.first_name }

  /// Check every field against its column limit.
  pub fn validate(&self) -> Result<()> {
    validate_fields(
      &self.employee_number,
      &self.first_name,
      &self.paternal_surname,
      self.maternal_surname.as_deref(),
      &self.email,
      self.phone.as_deref(),
    )
  }
}

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// Body of `POST /profesores`. The store assigns `id`; `activo` starts `true`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProfessor {
  #[serde(rename = "numeroEmpleado")]
  pub employee_number:  String,
  #[serde(rename = "nombre")]
  pub first_name:       String,
  #[serde(rename = "apellidoPaterno")]
  pub paternal_surname: String,
  #[serde(rename = "apellidoMaterno", default)]
  pub maternal_surname: Option<String>,
  pub email:            String,
  #[serde(rename = "telefono", default)]
  pub phone:            Option<String>,
}

impl NewProfessor {
  pub fn validate(&self) -> Result<()> {
    validate_fields(
      &self.employee_number,
      &self.first_name,
      &self.paternal_surname,
      self.maternal_surname.as_deref(),
      &self.email,
      self.phone.as_deref(),
    )
  }
}

/// Body of `PUT /profesores/{id}`.
///
/// Missing keys and explicit `null`s both leave the field untouched, so a
/// stored `apellidoMaterno` or `telefono` can't be wiped here. `activo` is
/// accepted but never applied here; activation has its own endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfessorPatch {
  #[serde(rename = "nombre")]
  pub first_name:       Patch<String>,
  #[serde(rename = "apellidoPaterno")]
  pub paternal_surname: Patch<String>,
  #[serde(rename = "apellidoMaterno")]
  pub maternal_surname: Patch<String>,
  pub email:            Patch<String>,
  #[serde(rename = "telefono")]
  pub phone:            Patch<String>,
  #[serde(rename = "activo")]
  pub active:           Patch<bool>,
}

// ─── Views ───────────────────────────────────────────────────────────────────

/// Full read shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorView {
  pub id:               i64,
  pub numero_empleado:  String,
  pub nombre:           String,
  pub apellido_paterno: String,
  pub apellido_materno: Option<String>,
  pub nombre_completo:  String,
  pub email:            String,
  pub telefono:         Option<String>,
  pub activo:           bool,
}

impl From<Professor> for ProfessorView {
  fn from(p: Professor) -> Self {
    Self {
      nombre_completo:  p.full_name().to_owned(),
      id:               p.id,
      numero_empleado:  p.employee_number,
      nombre:           p.first_name,
      apellido_paterno: p.paternal_surname,
      apellido_materno: p.maternal_surname,
      email:            p.email,
      telefono:         p.phone,
      activo:           p.active,
    }
  }
}

/// Reduced read shape used by the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorSummary {
  pub id:              i64,
  pub numero_empleado: String,
  pub nombre_completo: String,
  pub email:           String,
  pub activo:          bool,
}

impl From<Professor> for ProfessorSummary {
  fn from(p: Professor) -> Self {
    Self {
      nombre_completo: p.full_name().to_owned(),
      id:              p.id,
      numero_empleado: p.employee_number,
      email:           p.email,
      activo:          p.active,
    }
  }
}

// ─── Validation helpers ──────────────────────────────────────────────────────

fn validate_fields(
  employee_number:  &str,
  first_name:       &str,
  paternal_surname: &str,
  maternal_surname: Option<&str>,
  email:            &str,
  phone:            Option<&str>,
) -> Result<()> {
  required("numeroEmpleado", employee_number, EMPLOYEE_NUMBER_MAX)?;
  required("nombre", first_name, NAME_MAX)?;
  required("apellidoPaterno", paternal_surname, NAME_MAX)?;
  optional("apellidoMaterno", maternal_surname, NAME_MAX)?;
  required("email", email, EMAIL_MAX)?;
  optional("telefono", phone, PHONE_MAX)?;
  Ok(())
}

fn required(field: &str, value: &str, max: usize) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::Validation(format!("El campo {field} es obligatorio")));
  }
  optional(field, Some(value), max)
}

fn optional(field: &str, value: Option<&str>, max: usize) -> Result<()> {
  match value {
    Some(v) if v.chars().count() > max => Err(Error::Validation(format!(
      "El campo {field} excede la longitud máxima de {max} caracteres"
    ))),
    _ => Ok(()),
  }
}
