//! Authentication module for customer accounts.
//!
//! This module provides the public interface for customer authentication:
//! login, registration, and the token issuance both depend on.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
