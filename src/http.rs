//! Transport primitives for token exchanges.
//!
//! The module exposes [`TokenHttpClient`], the crate's only dependency on an HTTP stack.
//! Requests and responses use the `oauth2` crate's [`HttpRequest`] and [`HttpResponse`]
//! aliases so custom transports can be written against plain `http` types.

pub use oauth2;

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
use oauth2::{HttpClientError, HttpRequest, HttpResponse};
#[cfg(feature = "reqwest")] use reqwest::{Proxy, redirect::Policy};
// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::{error::ConfigError, flows::ClientOptions};

/// Future returned by [`TokenHttpClient::execute`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError<E>>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing a token request.
///
/// Implementations perform exactly one round trip per call and return the response as-is,
/// whatever its status. Status classification, JSON parsing, and signature checks happen in
/// the caller. Implementations must be `Send + Sync + 'static` so they can be shared behind
/// an [`Arc`] across clients and tasks.
pub trait TokenHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves with the raw response.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Token requests should not follow redirects; a token endpoint answers directly. Clients
/// built through [`ReqwestHttpClient::from_options`] disable redirects and only use the
/// proxy named in [`ClientOptions`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client honoring the proxy, certificate, and timeout settings in `options`.
	pub fn from_options(options: &ClientOptions) -> Result<Self, ConfigError> {
		let mut builder = ReqwestClient::builder().redirect(Policy::none());

		builder = match &options.proxy {
			Some(proxy) => builder.proxy(Proxy::https(proxy.as_str())?),
			None => builder.no_proxy(),
		};

		if !options.reject_invalid_certificates {
			builder = builder.danger_accept_invalid_certs(true);
		}
		if let Some(timeout) = options.timeout {
			builder = builder.timeout(timeout);
		}

		Ok(Self(builder.build()?))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl TokenHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response =
				client.execute(request.try_into().map_err(Box::new)?).await.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;

	#[test]
	fn builds_client_from_options() {
		let options = ClientOptions::default()
			.with_proxy(Url::parse("http://proxy.internal:3128").expect("Proxy URL should parse."))
			.with_reject_invalid_certificates(false)
			.with_timeout(std::time::Duration::from_secs(5));

		assert!(ReqwestHttpClient::from_options(&options).is_ok());
		assert!(ReqwestHttpClient::from_options(&ClientOptions::default()).is_ok());
	}
}
