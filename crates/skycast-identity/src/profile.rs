//! Profile mirror into the provider's JSON database.
//!
//! After sign-up the service writes `{ "email": ... }` under `users/<uid>`
//! so the account is visible in the provider's database console. The
//! provider remains the owner of the account; this record is a mirror,
//! not a source of truth.

use reqwest::Client;
use std::time::Duration;
use tracing::instrument;

use crate::error::IdentityError;

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct ProfileStore {
    client: Client,
    base_url: String,
}

impl ProfileStore {
    /// Create a store against the given database base URL.
    pub fn new(base_url: &str) -> Result<Self, IdentityError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Write the minimal profile record for a freshly registered account.
    ///
    /// The caller's id token authorizes the write. Callers treat failures
    /// as non-fatal; registration has already succeeded at the provider.
    #[instrument(skip(self, id_token), level = "debug")]
    pub async fn save_profile(
        &self,
        uid: &str,
        email: &str,
        id_token: &str,
    ) -> Result<(), IdentityError> {
        let url = format!(
            "{}/users/{}.json?auth={}",
            self.base_url,
            urlencoding::encode(uid),
            urlencoding::encode(id_token),
        );

        let response = self
            .client
            .put(&url)
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(uid, "profile record written");
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(IdentityError::Provider {
                status: status.as_u16(),
                message,
            })
        }
    }
}
