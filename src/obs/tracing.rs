// self
use crate::{_prelude::*, obs::FlowKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedFlow<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFlow<F> = F;

/// A span builder used by token flows.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Creates a new span tagged with the provided flow kind + stage.
	pub fn new(kind: FlowKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("salesforce_oauth2.flow", flow = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedFlow<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a debug event before the token request leaves the process.
///
/// Only the endpoint without its query is logged; the query carries credentials.
pub fn trace_token_request(endpoint: &Url, grant_type: Option<&str>) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			endpoint = %endpoint.origin().ascii_serialization(),
			path = endpoint.path(),
			grant_type,
			"Sending token request."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (endpoint, grant_type);
	}
}

/// Emits a warning when the token endpoint rejects the request.
pub fn trace_http_status(status: u16) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(status, "Token endpoint rejected the request.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = status;
	}
}

/// Emits a warning when a token response fails signature verification.
pub fn trace_signature_mismatch(identity: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(identity, "Token response signature could not be verified.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = identity;
	}
}
