//! Username-Password flow.

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
	/// Exchanges user credentials for a verified token payload.
	///
	/// `params` should carry `client_id`, `client_secret`, `username`, and `password`.
	/// Salesforce expects the user's security token appended to `password` unless the
	/// caller's IP range is trusted. `grant_type=password` is merged in unless `params`
	/// already sets one.
	pub async fn password(&self, params: Params) -> Result<TokenResponse> {
		self.exchange_grant(GrantType::Password, "password", params).await
	}
}

impl<C> ConnectedApp<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Exchanges `username` and `password` using the configured Connected App credentials.
	pub async fn password(&self, username: &str, password: &str) -> Result<TokenResponse> {
		let params = self.credential_params().with("username", username).with("password", password);

		self.auth.password(params).await
	}
}
