//! Salesforce OAuth 2.0 flows: Web Server (authorization code), Username-Password, and
//! Refresh Token.
//!
//! Two thin styles sit over the same core:
//!
//! - [`SalesforceAuth`] is stateless: every call receives the complete parameter mapping
//!   (`client_id`, `client_secret`, ...), the way Salesforce documents each grant.
//! - [`ConnectedApp`] is pre-configured with a [`ClientConfig`] and fills the Connected App
//!   credentials into each call.
//!
//! [`authorization_url`] and [`exchange_token`] expose the core directly.

pub mod authorization;
pub mod exchange;
pub mod options;

mod authorization_code;
mod password;
mod refresh;

pub use authorization::*;
pub use exchange::*;
pub use options::*;

// self
use crate::{_prelude::*, endpoint::Endpoints, http::TokenHttpClient, params::Params};
#[cfg(feature = "reqwest")] use crate::{error::ConfigError, http::ReqwestHttpClient};

/// Stateless client holding only the transport and the endpoints.
///
/// Cloning is cheap; the transport sits behind an [`Arc`].
pub struct SalesforceAuth<C = DefaultHttpClient>
where
	C: ?Sized + TokenHttpClient,
{
	/// HTTP client used for every token request.
	pub http_client: Arc<C>,
	/// Authorization and token endpoints.
	pub endpoints: Endpoints,
}
impl<C> SalesforceAuth<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(endpoints: Endpoints, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), endpoints }
	}

	/// Returns a copy of this client that targets another login host (sandbox, My Domain, or
	/// community), sharing the same transport.
	pub fn with_base_host(&self, host: &Url) -> Self {
		Self { http_client: self.http_client.clone(), endpoints: Endpoints::from_base_host(host) }
	}

	/// Builds the URL the resource owner should be redirected to.
	///
	/// `params` should carry `client_id` and `redirect_uri`, and optionally `scope`.
	pub fn authorization_url(&self, params: Params) -> Url {
		authorization_url(&self.endpoints.authorization, params)
	}
}
#[cfg(feature = "reqwest")]
impl SalesforceAuth<ReqwestHttpClient> {
	/// Creates a client for the production login host with a default reqwest transport.
	///
	/// The transport ignores proxy environment variables; pass them explicitly through
	/// [`SalesforceAuth::from_options`].
	pub fn new() -> Result<Self, ConfigError> {
		Self::from_options(&ClientOptions::default())
	}

	/// Creates a client honoring every recognized option.
	pub fn from_options(options: &ClientOptions) -> Result<Self, ConfigError> {
		let http_client = ReqwestHttpClient::from_options(options)?;

		Ok(Self::with_http_client(options.endpoints(), http_client))
	}
}
impl<C> Clone for SalesforceAuth<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn clone(&self) -> Self {
		Self { http_client: self.http_client.clone(), endpoints: self.endpoints.clone() }
	}
}
impl<C> Debug for SalesforceAuth<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SalesforceAuth").field("endpoints", &self.endpoints).finish()
	}
}

/// Client pre-configured with Connected App credentials.
pub struct ConnectedApp<C = DefaultHttpClient>
where
	C: ?Sized + TokenHttpClient,
{
	/// Stateless core every call delegates to.
	pub auth: SalesforceAuth<C>,
	/// Connected App credentials.
	pub config: ClientConfig,
}
impl<C> ConnectedApp<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Wraps a stateless client with `config`.
	pub fn from_auth(auth: SalesforceAuth<C>, config: ClientConfig) -> Self {
		Self { auth, config }
	}

	/// Creates an app that reuses the caller-provided transport.
	pub fn with_http_client(
		endpoints: Endpoints,
		http_client: impl Into<Arc<C>>,
		config: ClientConfig,
	) -> Self {
		Self::from_auth(SalesforceAuth::with_http_client(endpoints, http_client), config)
	}

	/// Builds the authorization URL with the configured `client_id` and `redirect_uri`.
	///
	/// `scope` is a space-separated list such as `"api refresh_token"`.
	pub fn authorization_url(&self, scope: Option<&str>) -> Url {
		let mut params = Params::new();

		params.insert("client_id", self.config.client_id.as_str());

		if let Some(redirect_uri) = &self.config.redirect_uri {
			params.insert("redirect_uri", redirect_uri.as_str());
		}
		if let Some(scope) = scope {
			params.insert("scope", scope);
		}

		self.auth.authorization_url(params)
	}

	/// Client credentials every token request starts from.
	fn credential_params(&self) -> Params {
		Params::from([
			("client_id", self.config.client_id.as_str()),
			("client_secret", self.config.client_secret.expose()),
		])
	}
}
#[cfg(feature = "reqwest")]
impl ConnectedApp<ReqwestHttpClient> {
	/// Creates an app for the host and transport described by `options`.
	pub fn from_options(options: &ClientOptions, config: ClientConfig) -> Result<Self, ConfigError> {
		Ok(Self::from_auth(SalesforceAuth::from_options(options)?, config))
	}
}
impl<C> Clone for ConnectedApp<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn clone(&self) -> Self {
		Self { auth: self.auth.clone(), config: self.config.clone() }
	}
}
impl<C> Debug for ConnectedApp<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ConnectedApp")
			.field("endpoints", &self.auth.endpoints)
			.field("config", &self.config)
			.finish()
	}
}

/// Transport used when no type parameter is given.
#[cfg(feature = "reqwest")]
pub type DefaultHttpClient = ReqwestHttpClient;
/// Transport used when no type parameter is given.
#[cfg(not(feature = "reqwest"))]
pub type DefaultHttpClient = dyn TokenHttpClient<TransportError = std::io::Error>;
