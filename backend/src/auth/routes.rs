//! Defines the HTTP routes for authentication.
//!
//! These routes handle customer login and registration and are designed to
//! be merged into the main Axum router.

use crate::auth::handlers::*;
use axum::{Router, routing::post};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
}
