use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// The signing secret comes from the environment only; there is no
    /// baked-in default.
    pub fn from_env() -> Self {
        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET is not set");
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "portfolio".to_string());
        let access_token_expiry = env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(86_400);

        Self {
            secret_key,
            issuer,
            access_token_expiry,
        }
    }
}
