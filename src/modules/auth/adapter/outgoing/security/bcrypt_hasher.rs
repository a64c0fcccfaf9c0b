use bcrypt::{hash, verify, DEFAULT_COST};

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

#[derive(Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Minimum-cost variant for tests; DEFAULT_COST takes hundreds of
    /// milliseconds per hash.
    pub fn fast() -> Self {
        // bcrypt::MIN_COST is a private const in the bcrypt crate; its value
        // (the minimum cost bcrypt accepts) is 4.
        Self { cost: 4 }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash_password(&self, password: &str) -> Result<String, HashError> {
        hash(password, self.cost).map_err(|_| HashError::HashFailed)
    }

    fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        verify(password, hashed).map_err(|_| HashError::VerifyFailed)
    }
}
