//! Authorization redirect URL for the Web Server flow.

// self
use crate::{_prelude::*, params::Params};

/// `response_type` merged into every authorization URL unless the caller supplies one.
pub const DEFAULT_RESPONSE_TYPE: &str = "code";

/// Builds `endpoint?response_type=code&...` from `params`.
///
/// `response_type` is always placed first, set to `code` unless `params` already carries a
/// value for it; the caller's other parameters follow in insertion order. Values are percent-encoded
/// (`http://a/b` becomes `http%3A%2F%2Fa%2Fb`, spaces become `%20`). Any query already on
/// `endpoint` is replaced.
pub fn authorization_url(endpoint: &Url, params: Params) -> Url {
	params.with_defaults([("response_type", DEFAULT_RESPONSE_TYPE)]).apply_to(endpoint)
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use super::*;
	use crate::endpoint::Endpoints;

	fn options() -> Params {
		Params::from([
			("redirect_uri", "http://some/callback/url"),
			("client_id", "someconsumerkey"),
			("scope", "api"),
		])
	}

	#[test]
	fn builds_production_authorization_url() {
		let url = authorization_url(&Endpoints::production().authorization, options());

		assert_eq!(
			url.as_str(),
			"https://login.salesforce.com/services/oauth2/authorize?response_type=code&redirect_uri=http%3A%2F%2Fsome%2Fcallback%2Furl&client_id=someconsumerkey&scope=api"
		);
	}

	#[test]
	fn builds_custom_host_authorization_url() {
		let endpoints = Endpoints::parse_base_host("https://sb1dev-uofnextension.cs10.force.com")
			.expect("Custom host should parse.");
		let url = authorization_url(&endpoints.authorization, options());

		assert_eq!(
			url.as_str(),
			"https://sb1dev-uofnextension.cs10.force.com/services/oauth2/authorize?response_type=code&redirect_uri=http%3A%2F%2Fsome%2Fcallback%2Furl&client_id=someconsumerkey&scope=api"
		);
	}

	#[test]
	fn caller_response_type_wins() {
		let url = authorization_url(
			&Endpoints::production().authorization,
			options().with("response_type", "token"),
		);
		let pairs = url.query_pairs().into_owned().collect::<Vec<_>>();

		assert_eq!(pairs.iter().filter(|(k, _)| k == "response_type").count(), 1);
		assert_eq!(pairs.first(), Some(&("response_type".into(), "token".into())));
		assert_eq!(
			url.as_str(),
			"https://login.salesforce.com/services/oauth2/authorize?response_type=token&redirect_uri=http%3A%2F%2Fsome%2Fcallback%2Furl&client_id=someconsumerkey&scope=api"
		);
	}

	#[test]
	fn every_key_appears_once_and_decodes_back() {
		let params = Params::from([
			("client_id", "key with spaces"),
			("redirect_uri", "https://app.example.com/cb?x=1&y=2"),
			("scope", "api chatter refresh_token"),
			("state", "ünïcödé/?#"),
			("prompt", "login consent"),
		]);
		let url = authorization_url(&Endpoints::production().authorization, params.clone());
		let pairs = url.query_pairs().into_owned().collect::<Vec<_>>();
		let decoded: HashMap<_, _> = pairs.iter().cloned().collect();

		assert_eq!(pairs.len(), params.len() + 1);
		assert_eq!(decoded.len(), pairs.len());
		assert_eq!(decoded.get("response_type").map(String::as_str), Some("code"));

		for (key, value) in params.iter() {
			assert_eq!(decoded.get(key).map(String::as_str), Some(value), "Key {key} should round trip.");
		}

		let query = url.query().expect("Authorization URL should carry a query.");

		assert!(!query.contains(' '));
		assert!(!query.contains("+"));
	}
}
