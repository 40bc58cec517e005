//! Identity-provider error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Email address is already in use")]
    EmailExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password rejected by provider: {0}")]
    WeakPassword(String),

    #[error("Provider error: {status} - {message}")]
    Provider { status: u16, message: String },

    #[error("Invalid response from provider: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl IdentityError {
    /// Map a provider error code (the `error.message` field of a non-2xx
    /// response) to a typed variant.
    pub fn from_provider_code(status: u16, code: &str) -> Self {
        // Some codes carry a detail suffix, e.g.
        // "WEAK_PASSWORD : Password should be at least 6 characters".
        let bare = code.split(':').next().unwrap_or(code).trim();
        match bare {
            "EMAIL_EXISTS" => Self::EmailExists,
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS"
            | "USER_DISABLED" => Self::InvalidCredentials,
            "WEAK_PASSWORD" => Self::WeakPassword(code.to_string()),
            _ => Self::Provider {
                status,
                message: code.to_string(),
            },
        }
    }

    /// Whether this error is the special-cased duplicate-email rejection.
    pub fn is_duplicate_email(&self) -> bool {
        matches!(self, Self::EmailExists)
    }
}
