use serde::{Deserialize, Serialize};

/// An account as reported by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Opaque provider-assigned user id
    pub uid: String,

    /// Email the account was created with
    pub email: String,
}

/// Session material returned by a successful sign-up or sign-in.
///
/// The id token is forwarded to the browser as a bearer token; this
/// service never verifies it.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The authenticated account
    pub user: AuthenticatedUser,

    /// Id token for API requests
    pub id_token: String,

    /// Optional refresh token for token renewal
    pub refresh_token: Option<String>,

    /// Token expiration timestamp (Unix timestamp)
    pub expires_at: i64,
}

impl AuthSession {
    /// Build a session from provider material, converting the provider's
    /// relative `expires_in` into an absolute timestamp.
    pub fn new(
        user: AuthenticatedUser,
        id_token: String,
        refresh_token: Option<String>,
        expires_in_secs: i64,
    ) -> Self {
        let expires_at = chrono::Utc::now().timestamp() + expires_in_secs;
        Self {
            user,
            id_token,
            refresh_token,
            expires_at,
        }
    }

    /// Check if the session token is expired
    pub fn is_expired(&self) -> bool {
        let now = chrono::Utc::now().timestamp();
        now >= self.expires_at
    }
}
