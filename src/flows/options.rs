//! Recognized client options and Connected App credentials.

// self
use crate::{_prelude::*, auth::ClientSecret, endpoint::Endpoints, error::ConfigError};

/// Environment variables consulted by [`ClientOptions::from_env`], in priority order.
pub const PROXY_ENV_VARS: [&str; 2] = ["HTTPS_PROXY", "https_proxy"];

/// Transport and host options shared by every flow.
///
/// Nothing here is read from the environment implicitly; call [`ClientOptions::from_env`]
/// at application bootstrap to pick up a proxy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOptions {
	/// Login host used instead of `https://login.salesforce.com`.
	pub base_host: Option<Url>,
	/// HTTPS proxy every token request is forwarded through.
	pub proxy: Option<Url>,
	/// Rejects TLS certificates that fail validation (default `true`).
	pub reject_invalid_certificates: bool,
	/// Whole-request timeout applied by the transport.
	pub timeout: Option<std::time::Duration>,
}
impl ClientOptions {
	/// Returns defaults with the proxy taken from `HTTPS_PROXY`/`https_proxy`.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Same as [`ClientOptions::from_env`], reading variables through `lookup`.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let proxy = PROXY_ENV_VARS
			.iter()
			.find_map(|key| lookup(key).filter(|value| !value.trim().is_empty()))
			.map(|value| {
				Url::parse(value.trim())
					.map_err(|source| ConfigError::InvalidUrl { field: "proxy", source })
			})
			.transpose()?;

		Ok(Self { proxy, ..Self::default() })
	}

	/// Overrides the login host.
	pub fn with_base_host(mut self, host: Url) -> Self {
		self.base_host = Some(host);

		self
	}

	/// Sets the HTTPS proxy.
	pub fn with_proxy(mut self, proxy: Url) -> Self {
		self.proxy = Some(proxy);

		self
	}

	/// Toggles TLS certificate validation.
	pub fn with_reject_invalid_certificates(mut self, reject: bool) -> Self {
		self.reject_invalid_certificates = reject;

		self
	}

	/// Sets the transport timeout.
	pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Endpoints derived from [`ClientOptions::base_host`], or the production host.
	pub fn endpoints(&self) -> Endpoints {
		self.base_host.as_ref().map(Endpoints::from_base_host).unwrap_or_default()
	}
}
impl Default for ClientOptions {
	fn default() -> Self {
		Self { base_host: None, proxy: None, reject_invalid_certificates: true, timeout: None }
	}
}

/// Connected App credentials baked into a [`ConnectedApp`](crate::flows::ConnectedApp).
#[derive(Clone, Debug)]
pub struct ClientConfig {
	/// Consumer key (`client_id`).
	pub client_id: String,
	/// Consumer secret (`client_secret`).
	pub client_secret: ClientSecret,
	/// Callback URL registered for the Web Server flow.
	pub redirect_uri: Option<String>,
}
impl ClientConfig {
	/// Creates credentials without a redirect URI.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: ClientSecret::new(client_secret),
			redirect_uri: None,
		}
	}

	/// Sets the callback URL used by the Web Server flow.
	pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
		self.redirect_uri = Some(redirect_uri.into());

		self
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use super::*;

	#[test]
	fn from_lookup_prefers_uppercase_proxy() {
		let vars = HashMap::from([
			("HTTPS_PROXY", "http://upper.proxy:8080"),
			("https_proxy", "http://lower.proxy:8080"),
		]);
		let options = ClientOptions::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
			.expect("Proxy from environment should parse.");

		assert_eq!(options.proxy.as_ref().map(Url::as_str), Some("http://upper.proxy:8080/"));
		assert!(options.reject_invalid_certificates);
		assert_eq!(options.base_host, None);
	}

	#[test]
	fn from_lookup_falls_back_to_lowercase_and_skips_blank() {
		let vars = HashMap::from([("HTTPS_PROXY", "  "), ("https_proxy", "http://lower.proxy:8080")]);
		let options = ClientOptions::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
			.expect("Proxy from environment should parse.");

		assert_eq!(options.proxy.as_ref().map(Url::host_str), Some(Some("lower.proxy")));

		let options = ClientOptions::from_lookup(|_| None).expect("Empty environment is valid.");

		assert_eq!(options, ClientOptions::default());
	}

	#[test]
	fn from_lookup_rejects_malformed_proxy() {
		let err = ClientOptions::from_lookup(|_| Some("::not a url::".into()))
			.expect_err("Malformed proxy should fail.");

		assert!(matches!(err, ConfigError::InvalidUrl { field: "proxy", .. }));
	}

	#[test]
	fn endpoints_follow_base_host() {
		let options = ClientOptions::default().with_base_host(
			Url::parse("https://custom-login.salesforce.com").expect("Host should parse."),
		);

		assert_eq!(
			options.endpoints().token.as_str(),
			"https://custom-login.salesforce.com/services/oauth2/token"
		);
		assert_eq!(ClientOptions::default().endpoints(), Endpoints::production());
	}
}
