//! HTTP request handlers.
//!
//! Every handler checks the `Authorization` header before anything else,
//! including path and body extraction failures.
//! Identity always comes from the `x-client-id` header and the `{mac}` path
//! segment, never from the body.

use super::types::HealthResponse;
use super::{AppState, CLIENT_ID_HEADER};
use crate::error::{ProfileError, INVALID_CLIENT_OR_TOKEN, INVALID_TOKEN};
use crate::registry::{Client, Profile, ProfileEnvelope};
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Json,
};
use secrecy::ExposeSecret;
use tracing::{debug, info};

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = state.registry.read().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        registry_count: registry.count(),
    })
}

/// Register a new device profile.
pub async fn create_profile(
    State(state): State<AppState>,
    mac: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Client>), ProfileError> {
    authorize(&state, &headers, INVALID_TOKEN)?;
    let Path(mac) = mac?;
    let client_id = client_id(&headers)?;

    let mut registry = state.registry.write().await;
    if registry.exists_conflict(&client_id, &mac) {
        return Err(ProfileError::AlreadyExists);
    }

    let profile = decode_profile(&state, &body?)?;
    let client = Client::new(client_id, mac, profile);
    registry.insert(client.clone());

    info!(client_id = %client.client_id, mac = %client.mac_address, "Profile created");

    Ok((StatusCode::CREATED, Json(client)))
}

/// Get the profile of one device.
pub async fn get_profile(
    State(state): State<AppState>,
    mac: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
) -> Result<Json<Client>, ProfileError> {
    authorize(&state, &headers, INVALID_CLIENT_OR_TOKEN)?;
    let Path(mac) = mac?;
    let client_id = client_id(&headers)?;

    let registry = state.registry.read().await;
    let client = registry
        .find(&client_id, &mac)
        .cloned()
        .ok_or(ProfileError::NotFound(mac))?;

    Ok(Json(client))
}

/// List every registered device.
pub async fn list_profiles(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Client>>, ProfileError> {
    authorize(&state, &headers, INVALID_TOKEN)?;

    let registry = state.registry.read().await;
    Ok(Json(registry.all()))
}

/// Delete the profile of one device.
pub async fn delete_profile(
    State(state): State<AppState>,
    mac: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
) -> Result<String, ProfileError> {
    authorize(&state, &headers, INVALID_CLIENT_OR_TOKEN)?;
    let Path(mac) = mac?;
    let client_id = client_id(&headers)?;

    let mut registry = state.registry.write().await;
    if !registry.remove(&client_id, &mac) {
        return Err(ProfileError::NotFound(mac));
    }

    info!(client_id = %client_id, mac = %mac, "Profile deleted");

    Ok(format!("profile of client {} deleted", mac))
}

/// Replace the profile of one device wholesale.
pub async fn update_profile(
    State(state): State<AppState>,
    mac: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Client>, ProfileError> {
    authorize(&state, &headers, INVALID_CLIENT_OR_TOKEN)?;
    let Path(mac) = mac?;
    let client_id = client_id(&headers)?;

    let mut registry = state.registry.write().await;
    if registry.find(&client_id, &mac).is_none() {
        return Err(ProfileError::NotFound(mac));
    }

    let profile = decode_profile(&state, &body?)?;
    if profile.is_empty() {
        return Err(ProfileError::MissingApplications);
    }

    let client = Client::new(client_id, mac, profile);
    registry.replace(&client.client_id, &client.mac_address, client.clone());

    info!(
        client_id = %client.client_id,
        mac = %client.mac_address,
        applications = client.profile.applications.len(),
        "Profile updated"
    );

    Ok(Json(client))
}

/// Compare the `Authorization` header against `Bearer <token>`.
fn authorize(
    state: &AppState,
    headers: &HeaderMap,
    message: &'static str,
) -> Result<(), ProfileError> {
    let expected = format!("Bearer {}", state.token.expose_secret());
    let supplied = headers.get(AUTHORIZATION).map(|v| v.as_bytes());

    if supplied == Some(expected.as_bytes()) {
        Ok(())
    } else {
        Err(ProfileError::Unauthorized(message))
    }
}

/// Extract a non-empty client id from the request headers.
fn client_id(headers: &HeaderMap) -> Result<String, ProfileError> {
    headers
        .get(CLIENT_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(ProfileError::MissingClientId)
}

/// Decode a profile envelope from the request body.
///
/// An empty body is an empty profile. Only the first JSON value is read;
/// anything after it is ignored. An undecodable body is an empty profile too,
/// unless the service runs with `strict_body`, which also rejects trailing data.
fn decode_profile(state: &AppState, body: &[u8]) -> Result<Profile, ProfileError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Profile::default());
    }

    let decoded = if state.strict_body {
        serde_json::from_slice::<ProfileEnvelope>(body)
    } else {
        serde_json::Deserializer::from_slice(body)
            .into_iter::<ProfileEnvelope>()
            .next()
            .unwrap_or_else(|| Ok(ProfileEnvelope::default()))
    };

    match decoded {
        Ok(envelope) => Ok(envelope.profile),
        Err(e) if state.strict_body => {
            debug!(error = %e, "Rejecting malformed profile body");
            Err(ProfileError::MalformedBody)
        }
        Err(e) => {
            debug!(error = %e, "Ignoring malformed profile body");
            Ok(Profile::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use axum::http::HeaderValue;

    fn state(strict_body: bool) -> AppState {
        AppState::new(Registry::new(), "abcd1234", strict_body)
    }

    #[test]
    fn test_authorize() {
        let state = state(false);
        let mut headers = HeaderMap::new();

        assert_eq!(
            authorize(&state, &headers, INVALID_TOKEN),
            Err(ProfileError::Unauthorized(INVALID_TOKEN))
        );

        headers.insert(AUTHORIZATION, HeaderValue::from_static("abcd1234"));
        assert!(authorize(&state, &headers, INVALID_TOKEN).is_err());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abcd1234"));
        assert!(authorize(&state, &headers, INVALID_TOKEN).is_ok());
    }

    #[test]
    fn test_client_id_required() {
        let mut headers = HeaderMap::new();
        assert_eq!(client_id(&headers), Err(ProfileError::MissingClientId));

        headers.insert(CLIENT_ID_HEADER, HeaderValue::from_static(""));
        assert_eq!(client_id(&headers), Err(ProfileError::MissingClientId));

        headers.insert(CLIENT_ID_HEADER, HeaderValue::from_static("abcd"));
        assert_eq!(client_id(&headers), Ok("abcd".to_string()));
    }

    #[test]
    fn test_decode_profile_lenient() {
        let state = state(false);

        let profile = decode_profile(&state, br#"{"profile":""}"#).unwrap();
        assert!(profile.is_empty());

        let profile = decode_profile(&state, b"not json").unwrap();
        assert!(profile.is_empty());

        let profile = decode_profile(&state, b"").unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn test_decode_profile_ignores_trailing_data() {
        let body = br#"{"profile":{"applications":[{"applicationId":"test","version":"1.0"}]}} junk"#;

        let profile = decode_profile(&state(false), body).unwrap();
        assert_eq!(profile.applications.len(), 1);

        assert_eq!(
            decode_profile(&state(true), body),
            Err(ProfileError::MalformedBody)
        );
    }

    #[test]
    fn test_decode_profile_strict() {
        let state = state(true);

        assert_eq!(
            decode_profile(&state, br#"{"profile":""}"#),
            Err(ProfileError::MalformedBody)
        );
        assert!(decode_profile(&state, b"  ").unwrap().is_empty());

        let profile = decode_profile(
            &state,
            br#"{"profile":{"applications":[{"applicationId":"test","version":"1.0"}]}}"#,
        )
        .unwrap();
        assert_eq!(profile.applications.len(), 1);
    }
}
