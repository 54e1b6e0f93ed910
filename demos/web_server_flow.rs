//! Walks through the Web Server flow: build the authorization URL, then exchange the code the
//! callback receives against a local mock of the Salesforce token endpoint.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use salesforce_oauth2::{
	auth::sign,
	flows::{ClientConfig, ClientOptions, ConnectedApp},
};

const CONSUMER_KEY: &str = "demo-consumer-key";
const CONSUMER_SECRET: &str = "demo-consumer-secret";

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let identity = "https://login.salesforce.com/id/00Dd0000000dsWLEAY/005d0000000b8kWAAQ";
	let issued_at = "1332093834282";
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/services/oauth2/token")
				.query_param("grant_type", "authorization_code")
				.query_param("code", "aPrxYXyxzkuBzbiGVnf");
			then.status(200).header("content-type", "application/json").json_body(
				serde_json::json!({
					"id": identity,
					"issued_at": issued_at,
					"instance_url": "https://na14.salesforce.com",
					"signature": sign(identity, issued_at, CONSUMER_SECRET),
					"access_token": "00Dd0000000dsWL!demo",
					"scope": "api refresh_token",
					"refresh_token": "5Aep861demo"
				}),
			);
		})
		.await;
	let options = ClientOptions::default().with_base_host(Url::parse(&server.base_url())?);
	let app = ConnectedApp::from_options(
		&options,
		ClientConfig::new(CONSUMER_KEY, CONSUMER_SECRET)
			.with_redirect_uri("https://app.example.com/oauth/callback"),
	)?;

	println!("Send your user to {}.", app.authorization_url(Some("api refresh_token")));

	// Simulate the callback handler receiving `?code=...`.
	let token = app.authenticate("aPrxYXyxzkuBzbiGVnf").await?;

	token_mock.assert_async().await;

	println!(
		"Verified token for org {} and user {} on {}.",
		token.organization_id().unwrap_or("?"),
		token.user_id().unwrap_or("?"),
		token.instance_url
	);
	println!("Issued at {:?}; access token {}.", token.issued_at_time(), token.access_token);

	Ok(())
}
