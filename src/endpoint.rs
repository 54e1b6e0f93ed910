//! Salesforce login hosts and the OAuth endpoints derived from them.

// self
use crate::{_prelude::*, error::ConfigError};

/// Production login host.
pub const PRODUCTION_LOGIN_HOST: &str = "https://login.salesforce.com";
/// Sandbox login host.
pub const SANDBOX_LOGIN_HOST: &str = "https://test.salesforce.com";
/// Path appended to a login host to reach the authorization endpoint.
pub const AUTHORIZE_PATH: &str = "/services/oauth2/authorize";
/// Path appended to a login host to reach the token endpoint.
pub const TOKEN_PATH: &str = "/services/oauth2/token";

/// Authorization and token endpoints used by every flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
	/// Authorization endpoint the resource owner is redirected to.
	pub authorization: Url,
	/// Token endpoint used for every grant.
	pub token: Url,
}
impl Endpoints {
	/// Derives both endpoints from a login host such as `https://login.salesforce.com`, a
	/// My Domain, or a community domain.
	///
	/// Any path already on `host` is kept as a prefix; query and fragment are dropped.
	pub fn from_base_host(host: &Url) -> Self {
		Self { authorization: join_path(host, AUTHORIZE_PATH), token: join_path(host, TOKEN_PATH) }
	}

	/// Parses `host` and derives both endpoints from it.
	pub fn parse_base_host(host: &str) -> Result<Self, ConfigError> {
		let url = Url::parse(host)
			.map_err(|source| ConfigError::InvalidUrl { field: "base_host", source })?;

		Ok(Self::from_base_host(&url))
	}

	/// Endpoints served by the production login host.
	pub fn production() -> Self {
		Self::parse_base_host(PRODUCTION_LOGIN_HOST).expect("Production login host must parse.")
	}

	/// Endpoints served by the sandbox login host.
	pub fn sandbox() -> Self {
		Self::parse_base_host(SANDBOX_LOGIN_HOST).expect("Sandbox login host must parse.")
	}
}
impl Default for Endpoints {
	fn default() -> Self {
		Self::production()
	}
}

fn join_path(host: &Url, suffix: &str) -> Url {
	let mut url = host.clone();
	let prefix = host.path().trim_end_matches('/');

	url.set_path(&format!("{prefix}{suffix}"));
	url.set_query(None);
	url.set_fragment(None);

	url
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn production_endpoints_use_login_host() {
		let endpoints = Endpoints::default();

		assert_eq!(
			endpoints.authorization.as_str(),
			"https://login.salesforce.com/services/oauth2/authorize"
		);
		assert_eq!(endpoints.token.as_str(), "https://login.salesforce.com/services/oauth2/token");
		assert_eq!(
			Endpoints::sandbox().token.as_str(),
			"https://test.salesforce.com/services/oauth2/token"
		);
	}

	#[test]
	fn custom_hosts_keep_path_prefix() {
		let endpoints = Endpoints::parse_base_host("https://acme.my.site.com/partners/?x=1")
			.expect("Community host should parse.");

		assert_eq!(
			endpoints.authorization.as_str(),
			"https://acme.my.site.com/partners/services/oauth2/authorize"
		);

		let endpoints = Endpoints::parse_base_host("https://sb1dev-uofnextension.cs10.force.com")
			.expect("Sandbox host should parse.");

		assert_eq!(
			endpoints.token.as_str(),
			"https://sb1dev-uofnextension.cs10.force.com/services/oauth2/token"
		);
	}

	#[test]
	fn invalid_hosts_are_rejected() {
		let err = Endpoints::parse_base_host("not a url").expect_err("Invalid host should fail.");

		assert!(matches!(err, ConfigError::InvalidUrl { field: "base_host", .. }));
	}
}
