//! Error types shared by the authorization URL builder and the token exchanges.

// self
use crate::{_prelude::*, token::TokenResponse};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
///
/// Every variant is terminal for the call that produced it; nothing is retried internally.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Token endpoint responded with a success status but the body was not valid JSON.
	#[error(transparent)]
	Parse(#[from] ParseError),

	/// Token endpoint responded with an HTTP status of 400 or above.
	#[error("Token endpoint returned HTTP {status}: {message}.")]
	HttpStatus {
		/// Raw response body.
		message: String,
		/// HTTP status code.
		status: u16,
	},
	/// Token response parsed but its HMAC signature did not verify.
	///
	/// The payload is attached for diagnostics only and must not be treated as authentic.
	#[error("The signature could not be verified.")]
	SignatureMismatch {
		/// Untrusted payload returned by the token endpoint.
		payload: Box<TokenResponse>,
	},
}
impl Error {
	/// Returns the HTTP status code associated with the failure, when one is known.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::HttpStatus { status, .. } => Some(*status),
			Self::Parse(err) => err.status,
			_ => None,
		}
	}

	/// Returns the untrusted payload carried by a signature mismatch.
	pub fn untrusted_payload(&self) -> Option<&TokenResponse> {
		match self {
			Self::SignatureMismatch { payload } => Some(&**payload),
			_ => None,
		}
	}
}

/// Configuration and request construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// A configured URL (base host or proxy) cannot be parsed.
	#[error("The {field} URL is invalid.")]
	InvalidUrl {
		/// Which option carried the URL.
		field: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Token requests need `client_secret` to verify the response signature.
	#[error("The {grant} grant requires a client_secret parameter.")]
	MissingClientSecret {
		/// Grant label.
		grant: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the token endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the token endpoint.")]
	Io(#[from] std::io::Error),
	/// Transport reported a failure without a structured source.
	#[error("HTTP client error occurred while calling the token endpoint: {message}.")]
	Other {
		/// Transport-supplied description.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Token endpoint responded with malformed JSON.
#[derive(Debug, ThisError)]
#[error("Token endpoint returned malformed JSON.")]
pub struct ParseError {
	/// Structured parsing failure, including the path of the offending field.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
	/// HTTP status code of the response.
	pub status: Option<u16>,
}
