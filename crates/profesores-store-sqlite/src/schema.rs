//! SQL schema for the professor SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// The `UNIQUE` constraints are the authoritative uniqueness check. SQLite
/// reports violations as `table.column`, which [`crate::error`] matches to
/// classify them.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS profesores (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    numero_empleado  TEXT    NOT NULL CHECK (length(numero_empleado) <= 20),
    nombre           TEXT    NOT NULL CHECK (length(nombre) <= 100),
    apellido_paterno TEXT    NOT NULL CHECK (length(apellido_paterno) <= 100),
    apellido_materno TEXT             CHECK (length(apellido_materno) <= 100),
    email            TEXT    NOT NULL CHECK (length(email) <= 150),
    telefono         TEXT             CHECK (length(telefono) <= 15),
    activo           INTEGER NOT NULL DEFAULT 1 CHECK (activo IN (0, 1)),
    CONSTRAINT profesores_numero_empleado_key UNIQUE (numero_empleado),
    CONSTRAINT profesores_email_key           UNIQUE (email)
);

CREATE INDEX IF NOT EXISTS profesores_activo_idx ON profesores(activo);

PRAGMA user_version = 1;
";
