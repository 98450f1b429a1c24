//! Walks all three OAuth 1.0a legs against a local mock provider.
//!
//! 1. [`Broker::authorize_redirect`] fetches a request token and builds the redirect URL.
//! 2. The "user" approves and the provider calls back with `oauth_token` + `oauth_verifier`.
//! 3. [`Broker::complete_authorization`] trades them for an access token, which then signs a
//!    protected resource call.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde::Deserialize;
// self
use oauth1_broker::{
	auth::{ConsumerCredentials, ProviderId},
	flows::{Broker, CallbackQuery},
	provider::ProviderDescriptor,
	url::Url,
};

#[derive(Debug, Deserialize)]
struct Account {
	id: u64,
	screen_name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let request_token_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth/request_token").header_exists("authorization");
			then.status(200).body(
				"oauth_token=demo-request&oauth_token_secret=demo-request-secret&oauth_callback_confirmed=true",
			);
		})
		.await;
	let access_token_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/oauth/access_token").header_exists("authorization");
			then.status(200)
				.body("oauth_token=demo-access&oauth_token_secret=demo-access-secret");
		})
		.await;
	let account_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/1.1/account/verify_credentials.json");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":7,\"screen_name\":\"demo-user\"}");
		})
		.await;
	let descriptor = ProviderDescriptor::builder(ProviderId::new("demo-provider")?)
		.request_token_endpoint(&server.url("/oauth/request_token"))
		.authorize_endpoint(&server.url("/oauth/authorize"))
		.access_token_endpoint(&server.url("/oauth/access_token"))
		.callback("https://app.example.com/callback")
		.build()?;
	let broker = Broker::new(descriptor, ConsumerCredentials::new("demo-key", "demo-secret"));
	let redirect = broker.authorize_redirect([("force_login", "true")]).await?;

	println!("Send the user to: {redirect}");

	// Stand-in for the provider redirecting the user back to the callback.
	let callback = Url::parse(
		"https://app.example.com/callback?oauth_token=demo-request&oauth_verifier=demo-verifier",
	)?;
	let query = CallbackQuery::from_url(&callback);

	if !broker.is_callback_complete(&query) {
		println!("Authorization was not completed; start over.");

		return Ok(());
	}

	let access = broker.complete_authorization(&query).await?;

	println!("Access token: {} (secret {})", access.token, access.secret);

	let endpoint = Url::parse(&server.url("/1.1/account/verify_credentials.json"))?;
	let account: Account = broker.fetch_protected_resource(&endpoint, &access).await?;

	println!("Signed in as {} (#{}).", account.screen_name, account.id);

	request_token_mock.assert_async().await;
	access_token_mock.assert_async().await;
	account_mock.assert_async().await;

	Ok(())
}
