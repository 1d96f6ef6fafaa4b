//! Database repository for customer accounts.
//!
//! The `CredentialStore` trait is the persistence boundary the auth service
//! works against; `CustomerRepository` is its SQLite implementation.

use crate::database::models::{CreateCustomer, Customer};
use crate::errors::{ServiceError, ServiceResult};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Persistence interface for customer credentials.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Looks up a customer by email.
    async fn find_by_email(&self, email: &str) -> ServiceResult<Option<Customer>>;

    /// Inserts a new customer, failing with `AlreadyExists` if the email is
    /// taken. The insert itself is the uniqueness check, so two concurrent
    /// registrations for one email cannot both succeed.
    async fn create_if_email_absent(&self, customer: CreateCustomer) -> ServiceResult<Customer>;
}

/// SQLite-backed credential store.
pub struct CustomerRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for CustomerRepository<'_> {
    async fn find_by_email(&self, email: &str) -> ServiceResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM customers WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(customer)
    }

    async fn create_if_email_absent(&self, customer: CreateCustomer) -> ServiceResult<Customer> {
        let id = Uuid::now_v7().to_string();
        let created_at = Utc::now();

        let result = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (id, name, email, password_hash, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(&id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.password_hash)
        .bind(created_at)
        .fetch_one(self.pool)
        .await;

        match result {
            Ok(created) => Ok(created),
            Err(sqlx::Error::Database(db_error)) if db_error.is_unique_violation() => {
                Err(ServiceError::already_exists("Customer", &customer.email))
            }
            Err(error) => Err(error.into()),
        }
    }
}
