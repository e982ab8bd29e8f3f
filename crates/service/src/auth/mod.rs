//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Registration, login and the signed session token live here; the HTTP
//! cookie handling stays in the server crate.

pub mod domain;
pub mod errors;
pub mod repo;
pub mod repository;
pub mod service;
pub mod token;

pub use errors::AuthError;
pub use service::{AuthService, AuthSettings};
