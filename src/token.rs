//! Token endpoint response payload.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Successful token endpoint payload.
///
/// Fields Salesforce adds beyond the ones modeled here are kept in [`TokenResponse::extra`],
/// so serializing the value reproduces the body the server sent.
///
/// Only `access_token` is required to deserialize. The signed fields and `instance_url`
/// default to empty strings so an incomplete body still reaches signature verification,
/// which an empty `signature` never passes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
	/// Identity URL of the authenticated user (`.../id/<org>/<user>`).
	#[serde(default)]
	pub id: String,
	/// Issue time in milliseconds since the Unix epoch, as a decimal string.
	#[serde(default)]
	pub issued_at: String,
	/// Base64 HMAC-SHA256 of `id ++ issued_at`, keyed by the consumer secret.
	#[serde(default)]
	pub signature: String,
	/// Access token for API calls.
	pub access_token: TokenSecret,
	/// Instance the organization lives on.
	#[serde(default)]
	pub instance_url: String,
	/// Space-separated scopes granted to the access token.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scope: Option<String>,
	/// Refresh token, when the `refresh_token` scope was granted.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<TokenSecret>,
	/// Token type, usually `Bearer`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token_type: Option<String>,
	/// OpenID Connect ID token, when the `openid` scope was granted.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id_token: Option<String>,
	/// Any additional fields returned by the token endpoint.
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}
impl TokenResponse {
	/// Checks the payload signature against `secret`.
	pub fn verify(&self, secret: &str) -> bool {
		crate::auth::verify(self, secret)
	}

	/// Parses `issued_at` into a timestamp.
	pub fn issued_at_time(&self) -> Option<OffsetDateTime> {
		let millis = self.issued_at.parse::<i128>().ok()?;

		OffsetDateTime::from_unix_timestamp_nanos(millis.checked_mul(1_000_000)?).ok()
	}

	/// Organization identifier taken from the identity URL.
	pub fn organization_id(&self) -> Option<&str> {
		self.identity_segments().map(|(org, _)| org)
	}

	/// User identifier taken from the identity URL.
	pub fn user_id(&self) -> Option<&str> {
		self.identity_segments().map(|(_, user)| user)
	}

	/// Iterates over the granted scopes.
	pub fn scopes(&self) -> impl Iterator<Item = &str> {
		self.scope.as_deref().unwrap_or_default().split_whitespace()
	}

	fn identity_segments(&self) -> Option<(&str, &str)> {
		let mut segments = self.id.trim_end_matches('/').rsplit('/');
		let user = segments.next()?;
		let org = segments.next()?;

		(segments.next()? == "id" && !org.is_empty() && !user.is_empty()).then_some((org, user))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn sample() -> serde_json::Value {
		serde_json::json!({
			"id": "https://login.salesforce.com/id/00Dd0000000dsWLEAY/005d0000000b8kWAAQ",
			"issued_at": "1332093834282",
			"scope": "api refresh_token",
			"instance_url": "https://na14.salesforce.com",
			"signature": "tDZZRHgqtJWXw1cEjyuazDNkonKuIYT2EYnJrC7zbc8=",
			"access_token": "00Dd0000000dsWL!AR8AQ",
			"token_type": "Bearer",
			"custom_attribute": { "k": "v" }
		})
	}

	#[test]
	fn payload_round_trips_unknown_fields() {
		let value = sample();
		let payload: TokenResponse =
			serde_json::from_value(value.clone()).expect("Sample payload should deserialize.");

		assert_eq!(payload.extra.get("custom_attribute"), Some(&serde_json::json!({ "k": "v" })));
		assert_eq!(
			serde_json::to_value(&payload).expect("Payload should serialize."),
			value,
			"Serializing must reproduce the server body."
		);
	}

	#[test]
	fn identity_and_time_helpers() {
		let payload: TokenResponse =
			serde_json::from_value(sample()).expect("Sample payload should deserialize.");

		assert_eq!(payload.organization_id(), Some("00Dd0000000dsWLEAY"));
		assert_eq!(payload.user_id(), Some("005d0000000b8kWAAQ"));
		assert_eq!(payload.scopes().collect::<Vec<_>>(), vec!["api", "refresh_token"]);

		let issued = payload.issued_at_time().expect("issued_at should parse.");

		assert_eq!(issued.unix_timestamp(), 1_332_093_834);
		assert_eq!(issued.millisecond(), 282);
		assert!(payload.verify("some consumer secret"));
	}

	#[test]
	fn unsigned_payload_deserializes_but_never_verifies() {
		let payload: TokenResponse = serde_json::from_value(serde_json::json!({
			"id": "https://login.salesforce.com/id/00Dd0000000dsWLEAY/005d0000000b8kWAAQ",
			"issued_at": "1332093834282",
			"access_token": "00Dd0000000dsWL!AR8AQ"
		}))
		.expect("Payload without signature should deserialize.");

		assert_eq!(payload.signature, "");
		assert_eq!(payload.instance_url, "");
		assert!(!payload.verify("some consumer secret"));
		assert!(!payload.verify(""));
	}

	#[test]
	fn malformed_identity_yields_none() {
		let mut payload: TokenResponse =
			serde_json::from_value(sample()).expect("Sample payload should deserialize.");

		payload.id = "https://login.salesforce.com/".into();

		assert_eq!(payload.organization_id(), None);

		payload.issued_at = "yesterday".into();

		assert_eq!(payload.issued_at_time(), None);
	}
}
