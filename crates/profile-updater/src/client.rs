//! Profile registry HTTP client.

use crate::error::UpdaterError;
use profile_registry::{Client as DeviceClient, Profile, ProfileEnvelope};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Client for the registry's update endpoint.
///
/// The token is stored using `SecretString` so it stays out of logs.
#[derive(Clone)]
pub struct RegistryClient {
    client: Client,
    base_url: String,
    client_id: String,
    token: SecretString,
}

impl RegistryClient {
    /// Create a new registry client.
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, UpdaterError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            client_id: client_id.into(),
            token: SecretString::new(token.into()),
        })
    }

    /// Replace the profile stored for `mac`.
    #[instrument(skip(self, profile), fields(client_id = %self.client_id))]
    pub async fn update_profile(
        &self,
        mac: &str,
        profile: &Profile,
    ) -> Result<DeviceClient, UpdaterError> {
        let body = ProfileEnvelope::from(profile.clone());

        let response = self
            .client
            .put(format!("{}/profiles/{}", self.base_url, encode(mac)))
            .header(
                "Authorization",
                format!("Bearer {}", self.token.expose_secret()),
            )
            .header("x-client-id", &self.client_id)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Update rejected: {}", body);
            return Err(UpdaterError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let updated: DeviceClient = response.json().await?;
        debug!(
            applications = updated.profile.applications.len(),
            "Profile updated"
        );
        Ok(updated)
    }
}
