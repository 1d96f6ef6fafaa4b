//! Response envelope and error handling utilities for API responses.
//!
//! Every endpoint answers with the same JSON envelope:
//! - success: `{"error": false, "data": {...}}`
//! - failure: `{"error": true, "message": ..., "type": <status code>}`
//!
//! Validation failures carry field-level messages as a
//! `{field: [messages]}` map in `message`; everything else carries a plain
//! string. `service_error_to_http` is the single place a `ServiceError`
//! becomes a status code and body, so handlers stay thin.

use crate::errors::{FieldError, ServiceError};
use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

/// Successful response envelope.
#[derive(Debug, Serialize)]
pub struct ApiData<T> {
    /// Always `false` on this variant
    pub error: bool,
    pub data: T,
}

impl<T> ApiData<T> {
    pub fn new(data: T) -> Self {
        Self { error: false, data }
    }
}

/// Failure response envelope.
#[derive(Debug, Serialize)]
pub struct ApiFailure {
    /// Always `true` on this variant
    pub error: bool,
    /// Plain message, or a `{field: [messages]}` map for validation errors
    pub message: Value,
    /// Numeric status code category of the failure
    #[serde(rename = "type")]
    pub kind: u16,
}

impl ApiFailure {
    pub fn new(message: Value, kind: StatusCode) -> Self {
        Self {
            error: true,
            message,
            kind: kind.as_u16(),
        }
    }
}

/// Flattens `validator` output into field-level errors.
pub fn collect_field_errors(validation_errors: &ValidationErrors) -> Vec<FieldError> {
    validation_errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                FieldError::new(
                    field.to_string(),
                    error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                )
            })
        })
        .collect()
}

/// Groups field errors into the `{field: [messages]}` shape the envelope
/// carries.
fn field_errors_to_message(fields: &[FieldError]) -> Value {
    let mut grouped = serde_json::Map::new();
    for field_error in fields {
        if let Value::Array(messages) = grouped
            .entry(field_error.field.clone())
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            messages.push(Value::String(field_error.message.clone()));
        }
    }
    Value::Object(grouped)
}

/// Maps a service error to its HTTP status and failure envelope.
pub fn service_error_to_http(error: ServiceError) -> (StatusCode, Json<ApiFailure>) {
    let (status, message) = match error {
        ServiceError::MalformedRequest { fields } => {
            (StatusCode::BAD_REQUEST, field_errors_to_message(&fields))
        }
        ServiceError::ValidationFailed { fields } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            field_errors_to_message(&fields),
        ),
        ServiceError::AlreadyExists { entity, identifier } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            json!(format!("{} '{}' already exists", entity, identifier)),
        ),
        ServiceError::Unauthorized | ServiceError::InvalidToken { .. } => {
            (StatusCode::UNAUTHORIZED, json!("Unauthorized"))
        }
        ServiceError::Database { .. } | ServiceError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!("Internal server error"),
        ),
    };

    (status, Json(ApiFailure::new(message, status)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::to_value;

    #[test]
    fn success_envelope_shape() {
        let envelope = ApiData::new(json!({"access_token": "abc"}));
        let value = to_value(&envelope).unwrap();

        assert_eq!(value["error"], json!(false));
        assert_eq!(value["data"]["access_token"], json!("abc"));
    }

    #[test]
    fn validation_failure_maps_to_422_with_field_map() {
        let error = ServiceError::validation(vec![
            FieldError::new("email", "The email has already been taken."),
            FieldError::new("password", "Password must be at least 6 characters"),
        ]);

        let (status, Json(body)) = service_error_to_http(error);
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let value = to_value(&body).unwrap();
        assert_eq!(value["error"], json!(true));
        assert_eq!(value["type"], json!(422));
        assert_eq!(
            value["message"]["email"],
            json!(["The email has already been taken."])
        );
        assert_eq!(
            value["message"]["password"],
            json!(["Password must be at least 6 characters"])
        );
    }

    #[test]
    fn repeated_field_errors_group_into_one_array() {
        let error = ServiceError::malformed(vec![
            FieldError::new("email", "Email is required"),
            FieldError::new("email", "A valid email address is required"),
        ]);

        let (status, Json(body)) = service_error_to_http(error);
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let value = to_value(&body).unwrap();
        assert_eq!(
            value["message"]["email"],
            json!(["Email is required", "A valid email address is required"])
        );
    }

    #[test]
    fn unauthorized_maps_to_401_generic_message() {
        let (status, Json(body)) = service_error_to_http(ServiceError::Unauthorized);

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.message, json!("Unauthorized"));
        assert_eq!(body.kind, 401);
    }

    #[test]
    fn malformed_request_maps_to_400() {
        let error = ServiceError::malformed(vec![FieldError::new("email", "Email is required")]);

        let (status, Json(body)) = service_error_to_http(error);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.kind, 400);
    }

    #[test]
    fn internal_errors_stay_generic() {
        let (status, Json(body)) =
            service_error_to_http(ServiceError::internal("secret detail"));

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, json!("Internal server error"));
    }
}
