//! Refresh Token flow.
//!
//! Each call performs one `grant_type=refresh_token` exchange. Storing the refresh token
//! and deciding when to refresh stay with the caller.

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
	/// Exchanges a refresh token for a new verified token payload.
	///
	/// `params` should carry `client_id`, `client_secret`, and `refresh_token`.
	/// `grant_type=refresh_token` is merged in unless `params` already sets one.
	pub async fn refresh(&self, params: Params) -> Result<TokenResponse> {
		self.exchange_grant(GrantType::RefreshToken, "refresh", params).await
	}
}

impl<C> ConnectedApp<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Exchanges `refresh_token` using the configured Connected App credentials.
	pub async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse> {
		self.auth.refresh(self.credential_params().with("refresh_token", refresh_token)).await
	}
}
