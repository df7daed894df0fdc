//! [`ProfessorService`]: business rules over any [`ProfessorStore`].
//!
//! Uniqueness checks here are an optimistic fast path that produces precise
//! error messages. The store's unique constraints remain authoritative; a
//! violation reported by the store is mapped back onto the same error kinds.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::{
  Error, Result,
  patch::Patch,
  professor::{NewProfessor, Professor, ProfessorPatch, ProfessorSummary, ProfessorView},
  store::{ProfessorStore, StoreError, UniqueField},
};

/// Stateless service handle. Cloning is cheap; the store is shared.
pub struct ProfessorService<S> {
  store: Arc<S>,
}

impl<S> Clone for ProfessorService<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: ProfessorStore> ProfessorService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  // ── Create ──────────────────────────────────────────────────────────────

  /// Register a new professor. The employee number is checked before the
  /// email, and both before field validation, so a reused number is always
  /// reported as such.
  pub async fn create(&self, input: NewProfessor) -> Result<ProfessorView> {
    info!(numero_empleado = %input.employee_number, "creating professor");
    if self
      .store
      .exists_by_employee_number(&input.employee_number)
      .await
      .map_err(store_error)?
    {
      return Err(Error::DuplicateEmployeeNumber(input.employee_number));
    }
    if self
      .store
      .exists_by_email(&input.email)
      .await
      .map_err(store_error)?
    {
      return Err(Error::DuplicateEmail(input.email));
    }
    input.validate()?;

    let employee_number = input.employee_number.clone();
    let email = input.email.clone();
    let created = self
      .store
      .insert(input)
      .await
      .map_err(|e| write_error(e, employee_number, email, Error::DuplicateEmail))?;

    info!(id = created.id, "professor created");
    Ok(created.into())
  }

  // ── Reads ───────────────────────────────────────────────────────────────

  pub async fn list_all(&self) -> Result<Vec<ProfessorSummary>> {
    let all = self.store.find_all().await.map_err(store_error)?;
    Ok(all.into_iter().map(ProfessorSummary::from).collect())
  }

  pub async fn list_active(&self) -> Result<Vec<ProfessorSummary>> {
    let active = self.store.find_all_active().await.map_err(store_error)?;
    Ok(active.into_iter().map(ProfessorSummary::from).collect())
  }

  pub async fn list_inactive(&self) -> Result<Vec<ProfessorSummary>> {
    let inactive = self.store.find_all_inactive().await.map_err(store_error)?;
    Ok(inactive.into_iter().map(ProfessorSummary::from).collect())
  }

  pub async fn get_by_id(&self, id: i64) -> Result<ProfessorView> {
    self.require(id).await.map(ProfessorView::from)
  }

  pub async fn get_by_employee_number(&self, employee_number: &str) -> Result<ProfessorView> {
    self
      .store
      .find_by_employee_number(employee_number)
      .await
      .map_err(store_error)?
      .map(ProfessorView::from)
      .ok_or_else(|| Error::EmployeeNumberNotFound(employee_number.to_owned()))
  }

  pub async fn count_active(&self) -> Result<u64> {
    self.store.count_active().await.map_err(store_error)
  }

  // ── Update ──────────────────────────────────────────────────────────────

  /// Merge `patch` into the stored record. The employee number and the
  /// `active` flag are never changed here.
  pub async fn update(&self, id: i64, patch: ProfessorPatch) -> Result<ProfessorView> {
    info!(id, "updating professor");
    let mut professor = self.require(id).await?;

    let ProfessorPatch {
      first_name,
      paternal_surname,
      maternal_surname,
      email,
      phone,
      active,
    } = patch;

    if let Patch::Value(requested) = active {
      debug!(id, requested, "ignoring activo in update body");
    }

    if let Some(new_email) = email.value()
      && let Some(owner) = self.store.find_by_email(new_email).await.map_err(store_error)?
      && owner.id != id
    {
      return Err(Error::EmailInUse(new_email.clone()));
    }

    first_name.apply(&mut professor.first_name);
    paternal_surname.apply(&mut professor.paternal_surname);
    maternal_surname.apply_nullable(&mut professor.maternal_surname);
    email.apply(&mut professor.email);
    phone.apply_nullable(&mut professor.phone);
    professor.validate()?;

    let employee_number = professor.employee_number.clone();
    let email = professor.email.clone();
    let saved = self
      .store
      .save(professor)
      .await
      .map_err(|e| write_error(e, employee_number, email, Error::EmailInUse))?;

    info!(id, "professor updated");
    Ok(saved.into())
  }

  // ── Lifecycle ───────────────────────────────────────────────────────────

  pub async fn deactivate(&self, id: i64) -> Result<()> {
    info!(id, "deactivating professor");
    self.set_active(id, false).await
  }

  pub async fn activate(&self, id: i64) -> Result<()> {
    info!(id, "activating professor");
    self.set_active(id, true).await
  }

  /// Physically remove a record. Irreversible.
  pub async fn delete(&self, id: i64) -> Result<()> {
    info!(id, "deleting professor");
    if !self.store.exists_by_id(id).await.map_err(store_error)? {
      return Err(Error::NotFound(id));
    }
    // A concurrent delete may win between the check and the removal.
    if !self.store.delete_by_id(id).await.map_err(store_error)? {
      return Err(Error::NotFound(id));
    }
    info!(id, "professor deleted");
    Ok(())
  }

  // ── Helpers ─────────────────────────────────────────────────────────────

  async fn require(&self, id: i64) -> Result<Professor> {
    self
      .store
      .find_by_id(id)
      .await
      .map_err(store_error)?
      .ok_or(Error::NotFound(id))
  }

  async fn set_active(&self, id: i64, active: bool) -> Result<()> {
    let mut professor = self.require(id).await?;
    if professor.active == active {
      debug!(id, active, "active flag already set");
      return Ok(());
    }
    professor.active = active;
    self.store.save(professor).await.map_err(store_error)?;
    Ok(())
  }
}

fn store_error<E: StoreError>(e: E) -> Error {
  error!(error = %e, "store failure");
  Error::Store(Box::new(e))
}

/// Map a failed insert/save. Unique violations become business errors;
/// `on_email` picks the kind reported for an email clash.
fn write_error<E: StoreError>(
  e: E,
  employee_number: String,
  email: String,
  on_email: fn(String) -> Error,
) -> Error {
  match e.unique_violation() {
    Some(UniqueField::EmployeeNumber) => {
      debug!(%employee_number, "unique constraint fired on employee number");
      Error::DuplicateEmployeeNumber(employee_number)
    }
    Some(UniqueField::Email) => {
      debug!(%email, "unique constraint fired on email");
      on_email(email)
    }
    None => store_error(e),
  }
}
