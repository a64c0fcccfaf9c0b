use serde::{Deserialize, Serialize};

/// Claims carried by a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: i64,
    pub exp: i64,
    pub iat: i64,
    pub token_type: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: i64) -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
