//! Salesforce OAuth 2.0 client: build authorization URLs, exchange authorization codes,
//! credentials, or refresh tokens at the token endpoint, and verify the HMAC signature
//! Salesforce attaches to every token response.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod endpoint;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;
pub mod params;
pub mod token;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::sign,
		endpoint::Endpoints,
		flows::{ClientConfig, ConnectedApp, SalesforceAuth},
		http::ReqwestHttpClient,
	};

	/// Consumer key used by the integration fixtures.
	pub const TEST_CLIENT_ID: &str = "some consumer key";
	/// Consumer secret used by the integration fixtures.
	pub const TEST_CLIENT_SECRET: &str = "some consumer secret";
	/// Identity URL used by the integration fixtures.
	pub const TEST_IDENTITY: &str =
		"https://login.salesforce.com/id/00Dd0000000dsWLEAY/005d0000000b8kWAAQ";
	/// `issued_at` value used by the integration fixtures.
	pub const TEST_ISSUED_AT: &str = "1332093834282";

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.no_proxy()
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs a stateless [`SalesforceAuth`] pointed at `base_host`.
	pub fn build_test_auth(base_host: &str) -> SalesforceAuth {
		let base = Url::parse(base_host).expect("Failed to parse test base host.");

		SalesforceAuth::with_http_client(
			Endpoints::from_base_host(&base),
			Arc::new(test_reqwest_http_client()),
		)
	}

	/// Constructs a pre-configured [`ConnectedApp`] pointed at `base_host`.
	pub fn build_test_app(base_host: &str) -> ConnectedApp {
		let config = ClientConfig::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET)
			.with_redirect_uri("http://some/callback/url");

		ConnectedApp::from_auth(build_test_auth(base_host), config)
	}

	/// Returns a token response body signed with `secret`, mirroring the shape Salesforce
	/// sends back from the token endpoint.
	pub fn signed_token_body(secret: &str) -> serde_json::Value {
		serde_json::json!({
			"id": TEST_IDENTITY,
			"issued_at": TEST_ISSUED_AT,
			"scope": "api",
			"instance_url": "https://na14.salesforce.com",
			"signature": sign(TEST_IDENTITY, TEST_ISSUED_AT, secret),
			"access_token": "00Dd0000000dsWL!AR8AQCKKVxOwRhqhwXqNthdufggKWdUOOrp866CrJeEqF41eYP1kxtYmLMGxTkfRjFbzsD.Aqh8wvDyKyOPAVrDuyJS_bh2."
		})
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
