//! Web Server flow: exchange the authorization code delivered to the callback URL.

// self
use crate::{
	_prelude::*,
	flows::{ConnectedApp, GrantType, SalesforceAuth},
	http::TokenHttpClient,
	params::Params,
	token::TokenResponse,
};

impl<C> SalesforceAuth<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Exchanges an authorization code for a verified token payload.
	///
	/// `params` should carry `client_id`, `redirect_uri`, `code`, and `client_secret`.
	/// `grant_type=authorization_code` is merged in unless `params` already sets one.
	pub async fn authenticate(&self, params: Params) -> Result<TokenResponse> {
		self.exchange_grant(GrantType::AuthorizationCode, "authenticate", params).await
	}
}

impl<C> ConnectedApp<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Exchanges the `code` delivered to the configured callback URL.
	pub async fn authenticate(&self, code: &str) -> Result<TokenResponse> {
		let mut params = self.credential_params();

		if let Some(redirect_uri) = &self.config.redirect_uri {
			params.insert("redirect_uri", redirect_uri.as_str());
		}

		params.insert("code", code);

		self.auth.authenticate(params).await
	}
}
