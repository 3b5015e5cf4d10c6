//! Middleware HTTP
//!
//! CORS y autenticación JWT.

pub mod auth;
pub mod cors;

pub use auth::{auth_middleware, AuthenticatedCompany};
pub use cors::cors_middleware;
