//! Wiring for the professor microservice binary: configuration, store
//! opening and the top-level router.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use profesores_core::ProfessorService;
use profesores_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Store path that selects an in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Runtime server configuration, deserialised from `config.toml` and
/// `PROFESORES_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_store_path() -> PathBuf { PathBuf::from("profesores.db") }

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Startup ──────────────────────────────────────────────────────────────────

/// Open the store named by `path`, or an in-memory one for [`IN_MEMORY`].
pub async fn open_store(path: &Path) -> profesores_store_sqlite::Result<SqliteStore> {
  if path == Path::new(IN_MEMORY) {
    tracing::warn!("using an in-memory store; data is lost on exit");
    SqliteStore::open_in_memory().await
  } else {
    SqliteStore::open(expand_tilde(path)).await
  }
}

/// The full application: the API nested under `/api`, with request tracing.
pub fn app(store: SqliteStore) -> Router {
  let service = ProfessorService::new(Arc::new(store));
  Router::new()
    .nest("/api", profesores_api::api_router(service))
    .layer(TraceLayer::new_for_http())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
