//! HMAC-SHA256 signatures Salesforce attaches to token responses.
//!
//! The server signs the concatenation of the identity URL (`id`) and the `issued_at`
//! timestamp with the Connected App's consumer secret and sends the base64 digest in
//! `signature`. A response whose signature does not match was not produced by a server that
//! knows the secret.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
// self
use crate::token::TokenResponse;

type HmacSha256 = Hmac<Sha256>;

/// Computes the base64 signature Salesforce would send for `id` and `issued_at`.
pub fn sign(id: &str, issued_at: &str, secret: &str) -> String {
	STANDARD.encode(keyed_digest(id, issued_at, secret).finalize().into_bytes())
}

/// Returns true when `payload.signature` matches the HMAC of `id ++ issued_at`.
///
/// The digest comparison runs in constant time. Signatures that are not canonical base64
/// never match.
pub fn verify(payload: &TokenResponse, secret: &str) -> bool {
	let Ok(expected) = STANDARD.decode(payload.signature.as_bytes()) else {
		return false;
	};

	keyed_digest(&payload.id, &payload.issued_at, secret).verify_slice(&expected).is_ok()
}

fn keyed_digest(id: &str, issued_at: &str, secret: &str) -> HmacSha256 {
	let mut mac =
		HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");

	// Order matters: identity first, timestamp second.
	mac.update(id.as_bytes());
	mac.update(issued_at.as_bytes());

	mac
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::auth::TokenSecret;

	const SECRET: &str = "some consumer secret";
	const ID: &str = "https://login.salesforce.com/id/00Dd0000000dsWLEAY/005d0000000b8kWAAQ";
	const ISSUED_AT: &str = "1332093834282";
	const SIGNATURE: &str = "tDZZRHgqtJWXw1cEjyuazDNkonKuIYT2EYnJrC7zbc8=";

	fn payload(id: &str, issued_at: &str, signature: &str) -> TokenResponse {
		TokenResponse {
			id: id.into(),
			issued_at: issued_at.into(),
			signature: signature.into(),
			access_token: TokenSecret::new("access"),
			instance_url: "https://na14.salesforce.com".into(),
			scope: Some("api".into()),
			refresh_token: None,
			token_type: None,
			id_token: None,
			extra: Default::default(),
		}
	}

	fn flip(value: &str, idx: usize) -> String {
		value
			.char_indices()
			.map(|(i, c)| if i == idx { if c == 'A' { 'B' } else { 'A' } } else { c })
			.collect()
	}

	#[test]
	fn sign_matches_known_salesforce_signature() {
		assert_eq!(sign(ID, ISSUED_AT, SECRET), SIGNATURE);
		assert!(verify(&payload(ID, ISSUED_AT, SIGNATURE), SECRET));
	}

	#[test]
	fn wrong_secret_fails() {
		assert!(!verify(&payload(ID, ISSUED_AT, SIGNATURE), "another secret"));
	}

	#[test]
	fn any_single_character_flip_fails() {
		for idx in 0..SIGNATURE.len() {
			assert!(
				!verify(&payload(ID, ISSUED_AT, &flip(SIGNATURE, idx)), SECRET),
				"Signature flip at {idx} should not verify."
			);
		}
		for idx in 0..ID.len() {
			assert!(
				!verify(&payload(&flip(ID, idx), ISSUED_AT, SIGNATURE), SECRET),
				"Identity flip at {idx} should not verify."
			);
		}
		for idx in 0..ISSUED_AT.len() {
			assert!(
				!verify(&payload(ID, &flip(ISSUED_AT, idx), SIGNATURE), SECRET),
				"Timestamp flip at {idx} should not verify."
			);
		}
	}

	#[test]
	fn field_boundary_is_not_significant() {
		// The digest covers the raw concatenation, so moving bytes between fields still matches.
		let (head, tail) = ID.split_at(ID.len() - 4);
		let moved = format!("{tail}{ISSUED_AT}");

		assert!(verify(&payload(head, &moved, SIGNATURE), SECRET));
	}

	#[test]
	fn malformed_signatures_fail() {
		assert!(!verify(&payload(ID, ISSUED_AT, "invalid signature"), SECRET));
		assert!(!verify(&payload(ID, ISSUED_AT, ""), SECRET));
		assert!(!verify(&payload(ID, ISSUED_AT, &SIGNATURE[..20]), SECRET));
	}
}
