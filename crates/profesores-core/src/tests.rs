//! Service tests against an in-memory store.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::{
  Error, ProfessorService,
  patch::Patch,
  professor::{NewProfessor, Professor, ProfessorPatch},
  store::{ProfessorStore, StoreError, UniqueField},
};

// ─── In-memory store ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum MemoryError {
  #[error("unique constraint violated: {0:?}")]
  Unique(UniqueField),
  #[error("connection lost")]
  Offline,
  #[error("no row with id {0}")]
  Missing(i64),
}

impl StoreError for MemoryError {
  fn unique_violation(&self) -> Option<UniqueField> {
    match self {
      Self::Unique(field) => Some(*field),
      Self::Offline | Self::Missing(_) => None,
    }
  }
}

#[derive(Default)]
struct MemoryStore {
  rows:    Mutex<Vec<Professor>>,
  next_id: Mutex<i64>,
  /// Existence checks always answer `false`, as if a concurrent writer
  /// committed between the check and the write.
  blind:   bool,
  offline: bool,
}

impl MemoryStore {
  fn check_unique(&self, candidate: &Professor) -> Result<(), MemoryError> {
    let rows = self.rows.lock().unwrap();
    for row in rows.iter().filter(|r| r.id != candidate.id) {
      if row.employee_number == candidate.employee_number {
        return Err(MemoryError::Unique(UniqueField::EmployeeNumber));
      }
      if row.email == candidate.email {
        return Err(MemoryError::Unique(UniqueField::Email));
      }
    }
    Ok(())
  }

  fn select(&self, pred: impl Fn(&Professor) -> bool) -> Result<Vec<Professor>, MemoryError> {
    if self.offline {
      return Err(MemoryError::Offline);
    }
    Ok(self.rows.lock().unwrap().iter().filter(|r| pred(r)).cloned().collect())
  }

  fn first(&self, pred: impl Fn(&Professor) -> bool) -> Result<Option<Professor>, MemoryError> {
    Ok(self.select(pred)?.into_iter().next())
  }
}

impl ProfessorStore for MemoryStore {
  type Error = MemoryError;

  async fn find_by_id(&self, id: i64) -> Result<Option<Professor>, MemoryError> {
    self.first(|r| r.id == id)
  }

  async fn find_by_employee_number(
    &self,
    employee_number: &str,
  ) -> Result<Option<Professor>, MemoryError> {
    self.first(|r| r.employee_number == employee_number)
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<Professor>, MemoryError> {
    if self.blind {
      return Ok(None);
    }
    self.first(|r| r.email == email)
  }

  async fn exists_by_id(&self, id: i64) -> Result<bool, MemoryError> {
    Ok(self.first(|r| r.id == id)?.is_some())
  }

  async fn exists_by_employee_number(&self, employee_number: &str) -> Result<bool, MemoryError> {
    Ok(!self.blind && self.first(|r| r.employee_number == employee_number)?.is_some())
  }

  async fn exists_by_email(&self, email: &str) -> Result<bool, MemoryError> {
    Ok(!self.blind && self.first(|r| r.email == email)?.is_some())
  }

  async fn find_all(&self) -> Result<Vec<Professor>, MemoryError> { self.select(|_| true) }

  async fn find_all_active(&self) -> Result<Vec<Professor>, MemoryError> {
    self.select(|r| r.active)
  }

  async fn find_all_inactive(&self) -> Result<Vec<Professor>, MemoryError> {
    self.select(|r| !r.active)
  }

  async fn count_active(&self) -> Result<u64, MemoryError> {
    Ok(self.find_all_active().await?.len() as u64)
  }

  async fn insert(&self, input: NewProfessor) -> Result<Professor, MemoryError> {
    let mut professor = Professor {
      id:               0,
      employee_number:  input.employee_number,
      first_name:       input.first_name,
      paternal_surname: input.paternal_surname,
      maternal_surname: input.maternal_surname,
      email:            input.email,
      phone:            input.phone,
      active:           true,
    };
    self.check_unique(&professor)?;
    let mut next = self.next_id.lock().unwrap();
    *next += 1;
    professor.id = *next;
    self.rows.lock().unwrap().push(professor.clone());
    Ok(professor)
  }

  async fn save(&self, professor: Professor) -> Result<Professor, MemoryError> {
    self.check_unique(&professor)?;
    let mut rows = self.rows.lock().unwrap();
    let row = rows
      .iter_mut()
      .find(|r| r.id == professor.id)
      .ok_or(MemoryError::Missing(professor.id))?;
    *row = professor.clone();
    Ok(professor)
  }

  async fn delete_by_id(&self, id: i64) -> Result<bool, MemoryError> {
    let mut rows = self.rows.lock().unwrap();
    let before = rows.len();
    rows.retain(|r| r.id != id);
    Ok(rows.len() != before)
  }
}

#[tokio::test]
async fn memory_store_save_rejects_unknown_id() {
  let store = MemoryStore::default();
  let mut professor = store.insert(new_professor("E1", "ana@x.com")).await.unwrap();
  professor.id += 1;

  let err = store.save(professor).await.unwrap_err();
  assert!(matches!(err, MemoryError::Missing(2)));
  assert_eq!(err.unique_violation(), None);
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

fn service() -> ProfessorService<MemoryStore> {
  ProfessorService::new(Arc::new(MemoryStore::default()))
}

fn new_professor(number: &str, email: &str) -> NewProfessor {
  NewProfessor {
    employee_number:  number.into(),
    first_name:       "Ana".into(),
    paternal_surname: "Ruiz".into(),
    maternal_surname: Some("Soto".into()),
    email:            email.into(),
    phone:            Some("4421234567".into()),
  }
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_get_by_id() {
  let svc = service();
  let view = svc.create(new_professor("E100", "ana@x.com")).await.unwrap();

  assert!(view.activo);
  assert_eq!(view.nombre_completo, "Ana");

  let fetched = svc.get_by_id(view.id).await.unwrap();
  assert_eq!(fetched, view);
}

#[tokio::test]
async fn create_duplicate_employee_number_is_checked_first() {
  let svc = service();
  svc.create(new_professor("E100", "ana@x.com")).await.unwrap();

  // Same number and same email: the employee number wins.
  let err = svc.create(new_professor("E100", "ana@x.com")).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateEmployeeNumber(ref n) if n == "E100"));
  assert!(err.to_string().contains("número de empleado"));
}

#[tokio::test]
async fn create_duplicate_email() {
  let svc = service();
  svc.create(new_professor("E100", "ana@x.com")).await.unwrap();

  let err = svc.create(new_professor("E200", "ana@x.com")).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateEmail(ref e) if e == "ana@x.com"));
}

#[tokio::test]
async fn create_rejects_invalid_fields() {
  let svc = service();
  let mut input = new_professor("E100", "ana@x.com");
  input.employee_number = "X".repeat(21);

  let err = svc.create(input).await.unwrap_err();
  assert!(matches!(err, Error::Validation(_)));
  assert!(svc.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_reused_number_with_invalid_email_is_duplicate() {
  let svc = service();
  svc.create(new_professor("E1", "ana@x.com")).await.unwrap();

  let err = svc.create(new_professor("E1", &"a".repeat(151))).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateEmployeeNumber(ref n) if n == "E1"));

  let err = svc.create(new_professor("E1", "")).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateEmployeeNumber(_)));
}

#[tokio::test]
async fn store_unique_violation_maps_to_business_error() {
  let svc = ProfessorService::new(Arc::new(MemoryStore { blind: true, ..Default::default() }));
  svc.create(new_professor("E100", "ana@x.com")).await.unwrap();

  let err = svc.create(new_professor("E100", "eva@x.com")).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateEmployeeNumber(_)));

  let err = svc.create(new_professor("E200", "ana@x.com")).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateEmail(_)));
}

#[tokio::test]
async fn store_failures_are_not_business_errors() {
  let svc = ProfessorService::new(Arc::new(MemoryStore { offline: true, ..Default::default() }));
  let err = svc.list_all().await.unwrap_err();
  assert!(err.is_store());
  assert!(!err.is_not_found());
}

// ─── Reads ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_by_employee_number() {
  let svc = service();
  let created = svc.create(new_professor("E100", "ana@x.com")).await.unwrap();

  let fetched = svc.get_by_employee_number("E100").await.unwrap();
  assert_eq!(fetched.id, created.id);

  let err = svc.get_by_employee_number("E999").await.unwrap_err();
  assert!(err.is_not_found());
}

#[tokio::test]
async fn lists_split_by_active_flag() {
  let svc = service();
  let a = svc.create(new_professor("E1", "a@x.com")).await.unwrap();
  let b = svc.create(new_professor("E2", "b@x.com")).await.unwrap();
  svc.deactivate(b.id).await.unwrap();

  let all = svc.list_all().await.unwrap();
  assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), vec![a.id, b.id]);

  let active = svc.list_active().await.unwrap();
  assert_eq!(active.len(), 1);
  assert_eq!(active[0].id, a.id);

  let inactive = svc.list_inactive().await.unwrap();
  assert_eq!(inactive.len(), 1);
  assert_eq!(inactive[0].id, b.id);
  assert!(!inactive[0].activo);
}

#[tokio::test]
async fn count_active_after_deactivation() {
  let svc = service();
  let mut ids = vec![];
  for n in 1..=3 {
    let view = svc
      .create(new_professor(&format!("E{n}"), &format!("p{n}@x.com")))
      .await
      .unwrap();
    ids.push(view.id);
  }
  svc.deactivate(ids[1]).await.unwrap();
  assert_eq!(svc.count_active().await.unwrap(), 2);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_phone_only_leaves_other_fields() {
  let svc = service();
  let before = svc.create(new_professor("E100", "ana@x.com")).await.unwrap();

  let patch = ProfessorPatch { phone: Patch::Value("555".into()), ..Default::default() };
  let after = svc.update(before.id, patch).await.unwrap();

  assert_eq!(after.telefono.as_deref(), Some("555"));
  assert_eq!(after.nombre, before.nombre);
  assert_eq!(after.apellido_paterno, before.apellido_paterno);
  assert_eq!(after.apellido_materno, before.apellido_materno);
  assert_eq!(after.email, before.email);
  assert_eq!(after.numero_empleado, before.numero_empleado);
  assert_eq!(after.activo, before.activo);
}

#[tokio::test]
async fn update_email_owned_by_other_record_fails() {
  let svc = service();
  let ana = svc.create(new_professor("E1", "ana@x.com")).await.unwrap();
  svc.create(new_professor("E2", "eva@x.com")).await.unwrap();

  let patch = ProfessorPatch { email: Patch::Value("eva@x.com".into()), ..Default::default() };
  let err = svc.update(ana.id, patch).await.unwrap_err();
  assert!(matches!(err, Error::EmailInUse(_)));

  let unchanged = svc.get_by_id(ana.id).await.unwrap();
  assert_eq!(unchanged.email, "ana@x.com");
}

#[tokio::test]
async fn update_with_own_email_succeeds() {
  let svc = service();
  let ana = svc.create(new_professor("E1", "ana@x.com")).await.unwrap();

  let patch = ProfessorPatch {
    email: Patch::Value("ana@x.com".into()),
    first_name: Patch::Value("Ana María".into()),
    ..Default::default()
  };
  let view = svc.update(ana.id, patch).await.unwrap();
  assert_eq!(view.nombre, "Ana María");
  assert_eq!(view.nombre_completo, "Ana María");
}

#[tokio::test]
async fn update_ignores_activo() {
  let svc = service();
  let ana = svc.create(new_professor("E1", "ana@x.com")).await.unwrap();

  let patch = ProfessorPatch { active: Patch::Value(false), ..Default::default() };
  let view = svc.update(ana.id, patch).await.unwrap();
  assert!(view.activo);
}

#[tokio::test]
async fn update_null_leaves_fields_unchanged() {
  let svc = service();
  let ana = svc.create(new_professor("E1", "ana@x.com")).await.unwrap();

  let patch = ProfessorPatch {
    first_name: Patch::Null,
    maternal_surname: Patch::Null,
    email: Patch::Null,
    phone: Patch::Null,
    ..Default::default()
  };
  let view = svc.update(ana.id, patch).await.unwrap();
  assert_eq!(view, ana);

  let stored = svc.get_by_id(ana.id).await.unwrap();
  assert_eq!(stored.apellido_materno.as_deref(), Some("Soto"));
  assert_eq!(stored.telefono.as_deref(), Some("4421234567"));
}

#[tokio::test]
async fn update_missing_record_is_not_found() {
  let svc = service();
  let err = svc.update(42, ProfessorPatch::default()).await.unwrap_err();
  assert!(matches!(err, Error::NotFound(42)));
}

#[tokio::test]
async fn update_store_race_on_email_reports_email_in_use() {
  let svc = ProfessorService::new(Arc::new(MemoryStore { blind: true, ..Default::default() }));
  let ana = svc.create(new_professor("E1", "ana@x.com")).await.unwrap();
  svc.create(new_professor("E2", "eva@x.com")).await.unwrap();

  let patch = ProfessorPatch { email: Patch::Value("eva@x.com".into()), ..Default::default() };
  let err = svc.update(ana.id, patch).await.unwrap_err();
  assert!(matches!(err, Error::EmailInUse(ref e) if e == "eva@x.com"));
}

// ─── Lifecycle ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn deactivate_then_activate() {
  let svc = service();
  let ana = svc.create(new_professor("E1", "ana@x.com")).await.unwrap();

  svc.deactivate(ana.id).await.unwrap();
  assert!(!svc.get_by_id(ana.id).await.unwrap().activo);

  // Repeating is not an error.
  svc.deactivate(ana.id).await.unwrap();

  svc.activate(ana.id).await.unwrap();
  assert!(svc.get_by_id(ana.id).await.unwrap().activo);
}

#[tokio::test]
async fn lifecycle_on_missing_record_is_not_found() {
  let svc = service();
  assert!(matches!(svc.deactivate(9).await, Err(Error::NotFound(9))));
  assert!(matches!(svc.activate(9).await, Err(Error::NotFound(9))));
  assert!(matches!(svc.delete(9).await, Err(Error::NotFound(9))));
}

#[tokio::test]
async fn delete_then_lookups_are_not_found() {
  let svc = service();
  let ana = svc.create(new_professor("E1", "ana@x.com")).await.unwrap();

  svc.delete(ana.id).await.unwrap();

  assert!(matches!(svc.get_by_id(ana.id).await, Err(Error::NotFound(_))));
  assert!(matches!(
    svc.get_by_employee_number("E1").await,
    Err(Error::EmployeeNumberNotFound(_))
  ));

  // The identifiers are free again.
  svc.create(new_professor("E1", "ana@x.com")).await.unwrap();
}
