//! Bcrypt password hashing implementation.

use quill_core::ports::{AuthError, PasswordService};

/// Fixed work factor for stored credentials.
const WORK_FACTOR: u32 = 10;

/// Bcrypt-based password service with a fixed cost.
pub struct BcryptPasswordService {
    cost: u32,
}

impl BcryptPasswordService {
    pub fn new() -> Self {
        Self { cost: WORK_FACTOR }
    }

    /// Override the cost factor. Intended for tests, where the production
    /// work factor makes hashing needlessly slow.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for BcryptPasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        bcrypt::hash(password, self.cost).map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        bcrypt::verify(password, hash).map_err(|e| AuthError::HashingError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let service = BcryptPasswordService::with_cost(4);
        let password = "secure_password_123";

        let hash = service.hash(password).unwrap();
        assert!(service.verify(password, &hash).unwrap());
        assert!(!service.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let service = BcryptPasswordService::with_cost(4);

        let first = service.hash("same-input").unwrap();
        let second = service.hash("same-input").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let service = BcryptPasswordService::new();

        assert!(matches!(
            service.verify("anything", "not-a-bcrypt-hash"),
            Err(AuthError::HashingError(_))
        ));
    }
}
