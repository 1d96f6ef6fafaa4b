//! Core business logic for the authentication system.

use crate::api::common::collect_field_errors;
use crate::auth::models::*;
use crate::database::models::CreateCustomer;
use crate::errors::{FieldError, ServiceError, ServiceResult};
use crate::repositories::customer_repository::CredentialStore;
use crate::utils::jwt::TokenIssuer;
use bcrypt::{DEFAULT_COST, hash, verify};
use validator::Validate;

/// Authentication service handling login and registration against an
/// injected credential store and token issuer.
pub struct AuthService<'a> {
    store: &'a dyn CredentialStore,
    tokens: &'a TokenIssuer,
}

impl<'a> AuthService<'a> {
    pub fn new(store: &'a dyn CredentialStore, tokens: &'a TokenIssuer) -> Self {
        AuthService { store, tokens }
    }

    /// Authenticates a customer and issues a bearer token.
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenData> {
        if let Err(validation_errors) = request.validate() {
            return Err(ServiceError::malformed(collect_field_errors(
                &validation_errors,
            )));
        }

        // Unknown email and wrong password take the same exit so the
        // response cannot reveal whether an account exists.
        let customer = self
            .store
            .find_by_email(&request.email)
            .await?
            .ok_or(ServiceError::Unauthorized)?;

        // bcrypt::verify recomputes the hash and compares digests in
        // constant time.
        let password_matches = verify(&request.password, &customer.password_hash)
            .map_err(|e| ServiceError::internal(format!("password verification failed: {e}")))?;

        if !password_matches {
            return Err(ServiceError::Unauthorized);
        }

        let access_token = self.tokens.issue(&customer.id)?;

        Ok(TokenData {
            access_token,
            token_type: "bearer".to_string(),
            expires_in: self.tokens.ttl_seconds(),
        })
    }

    /// Registers a new customer and issues a bearer token for the account.
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterData> {
        if let Err(validation_errors) = request.validate() {
            return Err(ServiceError::validation(collect_field_errors(
                &validation_errors,
            )));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| ServiceError::internal(format!("password hashing failed: {e}")))?;

        // No separate existence pre-check: the store's unique index makes
        // the insert itself the check, which keeps concurrent duplicate
        // registrations from both succeeding.
        let create = CreateCustomer {
            name: request.name,
            email: request.email,
            password_hash,
        };

        let customer = match self.store.create_if_email_absent(create).await {
            Ok(customer) => customer,
            Err(ServiceError::AlreadyExists { .. }) => {
                return Err(ServiceError::validation(vec![FieldError::new(
                    "email",
                    "The email has already been taken.",
                )]));
            }
            Err(error) => return Err(error),
        };

        let token = self.tokens.issue(&customer.id)?;

        Ok(RegisterData { customer, token })
    }
}
