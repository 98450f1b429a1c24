//! Helpers shared by the integration tests.

#![allow(dead_code)]

// std
use std::{collections::HashMap, sync::Arc};
// self
use oauth1_broker::{
	auth::{ConsumerCredentials, ProviderId},
	flows::Broker,
	http::ReqwestHttpClient,
	provider::ProviderDescriptor,
	reqwest::Client as ReqwestClient,
	signer::{self, OAUTH_SIGNATURE, OAuthParameters},
	store::{LruTokenStore, PendingTokenStore},
	url::Url,
};

pub const CONSUMER_KEY: &str = "consumer-it";
pub const CONSUMER_SECRET: &str = "consumer-secret-it";
pub const CALLBACK: &str = "https://app.example.com/callback";

/// Broker type alias used by reqwest-backed integration tests.
pub type ReqwestTestBroker = Broker<ReqwestHttpClient>;

/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
/// `httpmock` during tests.
pub fn test_reqwest_http_client() -> ReqwestHttpClient {
	let client = ReqwestClient::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestHttpClient::with_client(client)
}

/// Builds a descriptor whose endpoints all live under `base` (typically a mock server URL).
pub fn test_descriptor(base: &str) -> ProviderDescriptor {
	let base = base.trim_end_matches('/');

	ProviderDescriptor::builder(
		ProviderId::new("mock-oauth1").expect("Mock provider identifier should be valid."),
	)
	.request_token_endpoint(&format!("{base}/oauth/request_token"))
	.authorize_endpoint(&format!("{base}/oauth/authorize"))
	.access_token_endpoint(&format!("{base}/oauth/access_token"))
	.callback(CALLBACK)
	.build()
	.expect("Mock provider descriptor should build successfully.")
}

pub fn test_credentials() -> ConsumerCredentials {
	ConsumerCredentials::new(CONSUMER_KEY, CONSUMER_SECRET)
}

/// Constructs a reqwest-backed [`Broker`] with a fresh [`LruTokenStore`] it shares with the
/// caller.
pub fn build_reqwest_test_broker(
	descriptor: ProviderDescriptor,
) -> (ReqwestTestBroker, Arc<LruTokenStore>) {
	let store_backend = Arc::new(LruTokenStore::default());
	let store: Arc<dyn PendingTokenStore> = store_backend.clone();
	let broker =
		Broker::with_http_client(descriptor, test_credentials(), test_reqwest_http_client())
			.with_store(store);

	(broker, store_backend)
}

/// Splits an `OAuth k="v",...` header back into its parameters.
pub fn parse_authorization(header: &str) -> HashMap<String, String> {
	header
		.strip_prefix("OAuth ")
		.expect("Authorization header should start with the OAuth scheme.")
		.split(',')
		.map(|pair| {
			let (key, value) =
				pair.split_once('=').expect("Authorization parameter should contain `=`.");

			(key.to_owned(), value.trim_matches('"').to_owned())
		})
		.collect()
}

/// Recomputes the signature a header should carry for `url` under `token_secret`.
pub fn expected_signature(header: &str, url: &Url, token_secret: Option<&str>) -> String {
	let params = parse_authorization(header)
		.into_iter()
		.filter(|(key, _)| key != OAUTH_SIGNATURE)
		.collect::<OAuthParameters>();
	let base = signer::build_base_string("GET", url.as_str(), &params);

	signer::sign(&base, &signer::signing_key(CONSUMER_SECRET, token_secret))
		.expect("Recomputing a signature should succeed.")
}
