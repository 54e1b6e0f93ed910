//! Token endpoint exchange shared by every grant.
//!
//! [`exchange_token`] performs exactly one `POST` with every parameter in the query string
//! and an empty body, then classifies the outcome:
//!
//! - the transport failed: [`Error::Transport`];
//! - HTTP status 400 or above: [`Error::HttpStatus`] with the raw body;
//! - a success status with a body that is not a token payload: [`Error::Parse`];
//! - a payload whose signature does not verify against `client_secret`:
//!   [`Error::SignatureMismatch`].

// crates.io
use oauth2::{
	HttpClientError, HttpRequest,
	http::{Method, Request, header::ACCEPT},
};
// self
use crate::{
	_prelude::*,
	auth,
	error::{ConfigError, ParseError, TransportError},
	flows::SalesforceAuth,
	http::TokenHttpClient,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	params::Params,
	token::TokenResponse,
};

/// Grants accepted by the token endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Web Server flow: exchange an authorization code.
	AuthorizationCode,
	/// Username-Password flow.
	Password,
	/// Refresh Token flow.
	RefreshToken,
}
impl GrantType {
	/// Returns the `grant_type` value sent to the token endpoint.
	pub const fn as_str(self) -> &'static str {
		match self {
			GrantType::AuthorizationCode => "authorization_code",
			GrantType::Password => "password",
			GrantType::RefreshToken => "refresh_token",
		}
	}

	const fn flow_kind(self) -> FlowKind {
		match self {
			GrantType::AuthorizationCode => FlowKind::AuthorizationCode,
			GrantType::Password => FlowKind::Password,
			GrantType::RefreshToken => FlowKind::Refresh,
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Exchanges `params` at `endpoint` and verifies the returned payload.
///
/// `params` is sent verbatim; callers merge their `grant_type` beforehand. The
/// `client_secret` parameter keys the signature check, so a request without one fails with
/// [`ConfigError::MissingClientSecret`] before any network traffic.
pub async fn exchange_token<C>(
	http_client: &C,
	endpoint: &Url,
	params: &Params,
) -> Result<TokenResponse>
where
	C: ?Sized + TokenHttpClient,
{
	let grant_type = params.get("grant_type");
	let secret = params.get("client_secret").ok_or_else(|| ConfigError::MissingClientSecret {
		grant: grant_type.unwrap_or("unspecified").to_owned(),
	})?;
	let request = build_token_request(endpoint, params)?;

	obs::trace_token_request(endpoint, grant_type);

	let response = http_client.execute(request).await.map_err(map_transport_error)?;
	let status = response.status().as_u16();

	if status >= 400 {
		obs::trace_http_status(status);

		return Err(Error::HttpStatus {
			message: String::from_utf8_lossy(response.body()).into_owned(),
			status,
		});
	}

	let payload = parse_token_response(response.body(), status)?;

	if auth::verify(&payload, secret) {
		Ok(payload)
	} else {
		obs::trace_signature_mismatch(&payload.id);

		Err(Error::SignatureMismatch { payload: Box::new(payload) })
	}
}

impl<C> SalesforceAuth<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Merges the grant's `grant_type` (caller values win) and runs the exchange inside a
	/// flow span.
	pub(crate) async fn exchange_grant(
		&self,
		grant: GrantType,
		stage: &'static str,
		params: Params,
	) -> Result<TokenResponse> {
		let kind = grant.flow_kind();
		let span = FlowSpan::new(kind, stage);

		obs::record_flow_outcome(kind, FlowOutcome::Attempt);

		let params = params.with_defaults([("grant_type", grant.as_str())]);
		let result = span
			.instrument(exchange_token(self.http_client.as_ref(), &self.endpoints.token, &params))
			.await;

		match &result {
			Ok(_) => obs::record_flow_outcome(kind, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(kind, FlowOutcome::Failure),
		}

		result
	}
}

fn build_token_request(endpoint: &Url, params: &Params) -> Result<HttpRequest> {
	let url = params.apply_to(endpoint);

	Request::builder()
		.method(Method::POST)
		.uri(url.as_str())
		.header(ACCEPT, "application/json")
		.body(Vec::new())
		.map_err(|e| ConfigError::from(e).into())
}

fn parse_token_response(body: &[u8], status: u16) -> Result<TokenResponse> {
	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| ParseError { source, status: Some(status) }.into())
}

fn map_transport_error<E>(err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => TransportError::network(*inner).into(),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) => TransportError::Other { message }.into(),
		_ => TransportError::Other { message: "unrecognized HTTP client error".into() }.into(),
	}
}
