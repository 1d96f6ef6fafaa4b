//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for customer
//! authentication (login, registration), parse request data, and hand off to
//! the `auth::service` for core business logic.

use crate::api::common::{ApiData, ApiFailure, service_error_to_http};
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::jwt::TokenIssuer;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Handle customer login request
#[axum::debug_handler]
pub async fn login(
    Extension(pool): Extension<SqlitePool>,
    Extension(tokens): Extension<Arc<TokenIssuer>>,
    Json(payload): Json<LoginRequest>,
) -> Result<(StatusCode, Json<ApiData<TokenData>>), (StatusCode, Json<ApiFailure>)> {
    let repo = CustomerRepository::new(&pool);
    let auth_service = AuthService::new(&repo, &tokens);

    match auth_service.login(payload).await {
        Ok(data) => Ok((StatusCode::OK, Json(ApiData::new(data)))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle customer registration request
#[axum::debug_handler]
pub async fn register(
    Extension(pool): Extension<SqlitePool>,
    Extension(tokens): Extension<Arc<TokenIssuer>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiData<RegisterData>>), (StatusCode, Json<ApiFailure>)> {
    let repo = CustomerRepository::new(&pool);
    let auth_service = AuthService::new(&repo, &tokens);

    match auth_service.register(payload).await {
        Ok(data) => Ok((StatusCode::CREATED, Json(ApiData::new(data)))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
