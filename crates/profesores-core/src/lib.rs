//! Core types, the store abstraction and business rules for the professor
//! registry.
//!
//! This crate is free of HTTP and database dependencies. Storage backends
//! implement [`store::ProfessorStore`]; the HTTP layer drives
//! [`service::ProfessorService`].

pub mod error;
pub mod patch;
pub mod professor;
pub mod service;
pub mod store;

pub use error::{Error, Result};
pub use service::ProfessorService;

#[cfg(test)]
mod tests;
