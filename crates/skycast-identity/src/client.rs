//! Client for the identity provider's account endpoints.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use crate::error::IdentityError;
use crate::types::{AuthSession, AuthenticatedUser};

const REQUEST_TIMEOUT_SECS: u64 = 10;

// Relative expiry the provider reports when it omits expiresIn.
const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

#[derive(Debug, Clone)]
pub struct IdentityClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Successful response shape shared by sign-up and sign-in.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    local_id: String,
    email: String,
    id_token: String,
    refresh_token: Option<String>,
    expires_in: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

impl IdentityClient {
    /// Create a client against the given provider base URL.
    ///
    /// The base URL is injectable so tests can point the client at a mock
    /// server.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, IdentityError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Create an account with an email/password pair.
    #[instrument(skip(self, password), level = "info")]
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, IdentityError> {
        self.credential_call("accounts:signUp", email, password)
            .await
    }

    /// Authenticate an existing account with an email/password pair.
    #[instrument(skip(self, password), level = "info")]
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, IdentityError> {
        self.credential_call("accounts:signInWithPassword", email, password)
            .await
    }

    async fn credential_call(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, IdentityError> {
        let url = format!("{}/v1/{}?key={}", self.base_url, endpoint, self.api_key);

        let body = serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });

        let response = self.client.post(&url).json(&body).send().await?;
        let session: SessionResponse = self.handle_response(response).await?;

        let expires_in = session
            .expires_in
            .as_deref()
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or(DEFAULT_EXPIRES_IN_SECS);

        Ok(AuthSession::new(
            AuthenticatedUser {
                uid: session.local_id,
                email: session.email,
            },
            session.id_token,
            session.refresh_token,
            expires_in,
        ))
    }

    /// Helper to handle provider responses and errors.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<SessionResponse, IdentityError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| IdentityError::InvalidResponse(e.to_string()))
        } else {
            let text = response.text().await.unwrap_or_default();
            let code = serde_json::from_str::<ProviderErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or(text);
            tracing::debug!(status = %status, code = %code, "identity provider rejected request");
            Err(IdentityError::from_provider_code(status.as_u16(), &code))
        }
    }
}
