//! Runs the Username-Password flow through the stateless client, picking up an HTTPS proxy
//! from the environment at bootstrap the way an application entry point would.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use salesforce_oauth2::{
	auth::sign,
	error::Error,
	flows::{ClientOptions, SalesforceAuth},
	params::Params,
};

const CONSUMER_SECRET: &str = "demo-consumer-secret";

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let identity = "https://login.salesforce.com/id/00Dd0000000dsWLEAY/005d0000000b8kWAAQ";
	let issued_at = "1332093834282";
	let _token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/services/oauth2/token").query_param("grant_type", "password");
			then.status(200).header("content-type", "application/json").json_body(
				serde_json::json!({
					"id": identity,
					"issued_at": issued_at,
					"instance_url": "https://na14.salesforce.com",
					"signature": sign(identity, issued_at, CONSUMER_SECRET),
					"access_token": "00Dd0000000dsWL!demo"
				}),
			);
		})
		.await;
	// The mock listens locally, so the environment proxy is dropped again after discovery.
	let mut options = ClientOptions::from_env()?;

	if let Some(proxy) = options.proxy.take() {
		println!("Discovered HTTPS proxy {proxy}; bypassing it for the local mock.");
	}

	let auth = SalesforceAuth::from_options(&options.with_base_host(Url::parse(&server.base_url())?))?;
	let params = Params::from([
		("client_id", "demo-consumer-key"),
		("client_secret", CONSUMER_SECRET),
		("username", "integration@example.com"),
		("password", "hunter2SECURITYTOKEN"),
	]);

	println!("Requesting a token with {params:?}.");

	match auth.password(params.clone()).await {
		Ok(token) => println!("Verified token issued for {}.", token.id),
		Err(Error::SignatureMismatch { payload }) =>
			eprintln!("Rejected forged response claiming identity {}.", payload.id),
		Err(e) => return Err(e.into()),
	}

	// A response signed with another secret never verifies.
	match auth.password(params.with("client_secret", "wrong-secret")).await {
		Err(Error::SignatureMismatch { .. }) => println!("Mismatched secret rejected as expected."),
		other => println!("Unexpected outcome: {other:?}."),
	}

	Ok(())
}
