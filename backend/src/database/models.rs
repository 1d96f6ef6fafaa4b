//! Database row models for the customers table.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A registered customer account.
///
/// `password_hash` is never serialized: responses that embed a customer
/// carry every column except the hash.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new customer. The id and creation timestamp
/// are assigned by the repository.
#[derive(Debug, Clone)]
pub struct CreateCustomer {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
