//! Data structures for authentication-related requests and responses.
//!
//! Defines the login and registration payloads with their validation rules,
//! and the response bodies wrapped by the API envelope.

use crate::database::models::Customer;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request payload. Fields default to empty when absent so a missing
/// field surfaces as a field-level validation error, not a decode failure.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "A valid email address is required")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request payload. Fields default to empty when absent, same
/// as `LoginRequest`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required and may not exceed 255 characters"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "A valid email address is required")
    )]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Password confirmation does not match"))]
    pub password_confirmation: String,
}

/// Login response carrying the issued bearer token
#[derive(Debug, Serialize)]
pub struct TokenData {
    pub access_token: String,
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
}

/// Registration response carrying the created customer and their token
#[derive(Debug, Serialize)]
pub struct RegisterData {
    pub customer: Customer,
    pub token: String,
}
