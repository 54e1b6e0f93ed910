#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
// self
use salesforce_oauth2::{_preludet::*, params::Params};

fn password_params() -> Params {
	Params::from([
		("client_id", TEST_CLIENT_ID),
		("client_secret", TEST_CLIENT_SECRET),
		("username", "some username"),
		("password", "some password"),
	])
}

#[tokio::test]
async fn password_merges_grant_type_and_verifies_the_response() {
	let server = MockServer::start_async().await;
	let body = signed_token_body(TEST_CLIENT_SECRET);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/services/oauth2/token")
				.query_param("grant_type", "password")
				.query_param("client_id", TEST_CLIENT_ID)
				.query_param("client_secret", TEST_CLIENT_SECRET)
				.query_param("username", "some username")
				.query_param("password", "some password");
			then.status(200).header("content-type", "application/json").json_body(body.clone());
		})
		.await;
	let auth = build_test_auth(&server.base_url());
	let payload = auth.password(password_params()).await.expect("Password flow should succeed.");

	mock.assert_async().await;

	assert_eq!(serde_json::to_value(&payload).expect("Payload should serialize."), body);
}

#[tokio::test]
async fn connected_app_password_uses_configured_credentials() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/services/oauth2/token")
				.query_param("grant_type", "password")
				.query_param("client_id", TEST_CLIENT_ID)
				.query_param("username", "some username")
				.query_param("password", "some passwordSECURITYTOKEN");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(signed_token_body(TEST_CLIENT_SECRET));
		})
		.await;
	let app = build_test_app(&server.base_url());
	let payload = app
		.password("some username", "some passwordSECURITYTOKEN")
		.await
		.expect("Password flow should succeed.");

	mock.assert_async().await;

	assert_eq!(payload.user_id(), Some("005d0000000b8kWAAQ"));
}

#[tokio::test]
async fn password_rejects_bad_credentials() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/services/oauth2/token");
			then.status(400)
				.header("content-type", "application/json")
				.body("{\"error\":\"invalid_grant\",\"error_description\":\"authentication failure\"}");
		})
		.await;
	let auth = build_test_auth(&server.base_url());
	let err = auth.password(password_params()).await.expect_err("Bad credentials should fail.");

	mock.assert_async().await;

	match err {
		Error::HttpStatus { message, status } => {
			assert_eq!(status, 400);
			assert!(message.contains("authentication failure"));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}
