#![cfg(feature = "reqwest")]

mod common;

// std
use std::{collections::VecDeque, sync::Arc};
// crates.io
use parking_lot::Mutex;
// self
use common::*;
use oauth1_broker::{
	auth::{AccessToken, TokenSecret},
	error::{Error, ErrorKind, TransportError},
	flows::{Broker, CallbackQuery},
	http::{HttpFuture, HttpResponse, OAuthHttpClient, SignedRequest},
	signer::{HMAC_SHA1, OAUTH_CALLBACK, OAUTH_TOKEN, OAUTH_VERIFIER},
	store::{LruTokenStore, PendingTokenStore},
	url::Url,
};

/// Transport that replays canned responses and records every signed request.
#[derive(Default)]
struct ScriptedTransport {
	responses: Mutex<VecDeque<Result<HttpResponse, String>>>,
	requests: Mutex<Vec<SignedRequest>>,
}
impl ScriptedTransport {
	fn with_responses<I>(responses: I) -> Arc<Self>
	where
		I: IntoIterator<Item = Result<HttpResponse, String>>,
	{
		Arc::new(Self {
			responses: Mutex::new(responses.into_iter().collect()),
			requests: Mutex::default(),
		})
	}

	fn requests(&self) -> Vec<SignedRequest> {
		self.requests.lock().clone()
	}
}
impl OAuthHttpClient for ScriptedTransport {
	fn get(&self, request: SignedRequest) -> HttpFuture<'_, HttpResponse> {
		self.requests.lock().push(request);

		let next =
			self.responses.lock().pop_front().expect("Transport was called more often than scripted.");

		Box::pin(async move { next.map_err(|message| TransportError::network(Message(message))) })
	}
}

#[derive(Debug)]
struct Message(String);
impl std::fmt::Display for Message {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}
impl std::error::Error for Message {}

fn scripted_broker(
	transport: Arc<ScriptedTransport>,
	store: Arc<LruTokenStore>,
) -> Broker<ScriptedTransport> {
	let descriptor = test_descriptor("https://provider.example.com");

	Broker::with_http_client(descriptor, test_credentials(), transport).with_store(store)
}

#[tokio::test]
async fn three_legs_sign_with_the_right_secrets() {
	let transport = ScriptedTransport::with_responses([
		Ok(HttpResponse::new(200, "oauth_token=abc123&oauth_token_secret=shh")),
		Ok(HttpResponse::new(200, "oauth_token=tok&oauth_token_secret=sec")),
		Ok(HttpResponse::new(200, "{\"ok\":true}")),
	]);
	let store = Arc::new(LruTokenStore::default());
	let broker = scripted_broker(transport.clone(), store.clone());
	let redirect = broker
		.authorize_redirect([("screen_name", "alice")])
		.await
		.expect("Request token leg should succeed.");

	assert_eq!(
		redirect.as_str(),
		"https://provider.example.com/oauth/authorize?screen_name=alice&oauth_token=abc123"
	);

	let access = broker
		.complete_authorization(&CallbackQuery::parse("oauth_token=abc123&oauth_verifier=v1"))
		.await
		.expect("Access token leg should succeed.");

	assert_eq!(access, AccessToken::new("tok", "sec"));

	let resource = Url::parse("https://api.example.com/1/statuses.json?count=5&since_id=9")
		.expect("Resource fixture should parse.");
	let body: serde_json::Value = broker
		.fetch_protected_resource(&resource, &access)
		.await
		.expect("Protected resource call should succeed.");

	assert_eq!(body["ok"], true);

	let requests = transport.requests();

	assert_eq!(requests.len(), 3);

	let leg_one = parse_authorization(&requests[0].authorization);

	assert_eq!(requests[0].url.path(), "/oauth/request_token");
	assert_eq!(leg_one.get("oauth_consumer_key").map(String::as_str), Some(CONSUMER_KEY));
	assert_eq!(leg_one.get("oauth_signature_method").map(String::as_str), Some(HMAC_SHA1));
	assert_eq!(leg_one.get("oauth_version").map(String::as_str), Some("1.0"));
	assert_eq!(leg_one.get(OAUTH_CALLBACK).map(String::as_str), Some(CALLBACK));
	assert!(!leg_one.contains_key(OAUTH_TOKEN));
	assert_eq!(leg_one.get("oauth_nonce").map(String::len), Some(32));
	assert_eq!(
		leg_one.get("oauth_signature"),
		Some(&expected_signature(&requests[0].authorization, &requests[0].url, None)),
		"Leg one must be signed with the consumer secret only."
	);

	let leg_three = parse_authorization(&requests[1].authorization);

	assert_eq!(requests[1].url.path(), "/oauth/access_token");
	assert_eq!(leg_three.get(OAUTH_TOKEN).map(String::as_str), Some("abc123"));
	assert_eq!(leg_three.get(OAUTH_VERIFIER).map(String::as_str), Some("v1"));
	assert!(!leg_three.contains_key(OAUTH_CALLBACK));
	assert_eq!(
		leg_three.get("oauth_signature"),
		Some(&expected_signature(&requests[1].authorization, &requests[1].url, Some("shh"))),
		"Leg three must be signed with the request token secret."
	);

	let resource_call = parse_authorization(&requests[2].authorization);

	assert_eq!(requests[2].url, resource);
	assert_eq!(resource_call.get(OAUTH_TOKEN).map(String::as_str), Some("tok"));
	assert_eq!(
		resource_call.get("oauth_signature"),
		Some(&expected_signature(&requests[2].authorization, &requests[2].url, Some("sec"))),
		"Resource calls must be signed with the access token secret."
	);
	assert!(store.is_empty());
}

#[tokio::test]
async fn unknown_callback_token_fails_without_network_call() {
	let transport = ScriptedTransport::with_responses([]);
	let broker = scripted_broker(transport.clone(), Arc::new(LruTokenStore::default()));
	let err = broker
		.complete_authorization(&CallbackQuery::parse(
			"oauth_token=never-issued&oauth_verifier=v1",
		))
		.await
		.expect_err("Unknown request tokens must fail.");

	assert!(matches!(&err, Error::UnknownToken { token } if token == "never-issued"));
	assert_eq!(err.kind(), ErrorKind::UnknownToken);
	assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn verifier_without_token_is_complete_but_unknown() {
	let transport = ScriptedTransport::with_responses([]);
	let broker = scripted_broker(transport.clone(), Arc::new(LruTokenStore::default()));
	let query = CallbackQuery::parse("oauth_verifier=v1");

	// Completeness only looks at the verifier; the token is checked against the store.
	assert!(broker.is_callback_complete(&query));
	assert!(!broker.is_callback_complete(&CallbackQuery::parse("oauth_token=abc123")));
	assert!(!broker.is_callback_complete(&CallbackQuery::parse(
		"oauth_token=abc123&oauth_verifier="
	)));

	let err = broker.complete_authorization(&query).await.expect_err("Missing tokens must fail.");

	assert_eq!(err.kind(), ErrorKind::UnknownToken);
	assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn evicted_request_token_is_unknown() {
	let transport = ScriptedTransport::with_responses([
		Ok(HttpResponse::new(200, "oauth_token=first&oauth_token_secret=first-secret")),
		Ok(HttpResponse::new(200, "oauth_token=second&oauth_token_secret=second-secret")),
		Ok(HttpResponse::new(200, "oauth_token=tok&oauth_token_secret=sec")),
	]);
	// Room for exactly one pending entry.
	let store = Arc::new(LruTokenStore::with_capacity("second".len() + "second-secret".len()));
	let broker = scripted_broker(transport.clone(), store.clone());

	for _ in 0..2 {
		broker
			.authorize_redirect(Vec::<(String, String)>::new())
			.await
			.expect("Request token leg should succeed.");
	}

	assert!(store.get("first").is_none());
	assert!(store.size() <= store.capacity());

	let err = broker
		.complete_authorization(&CallbackQuery::parse("oauth_token=first&oauth_verifier=v1"))
		.await
		.expect_err("Evicted request tokens must fail.");

	assert_eq!(err.kind(), ErrorKind::UnknownToken);
	assert_eq!(transport.requests().len(), 2);

	let access = broker
		.complete_authorization(&CallbackQuery::parse("oauth_token=second&oauth_verifier=v2"))
		.await
		.expect("The surviving request token should still complete.");

	assert_eq!(access, AccessToken::new("tok", "sec"));
}

#[tokio::test]
async fn missing_verifier_keeps_pending_entry() {
	let transport = ScriptedTransport::with_responses([]);
	let store = Arc::new(LruTokenStore::default());
	let broker = scripted_broker(transport.clone(), store.clone());

	store.put("abc123", TokenSecret::new("shh"));

	let err = broker
		.complete_authorization(&CallbackQuery::parse("oauth_token=abc123"))
		.await
		.expect_err("Callbacks without a verifier must fail.");

	assert_eq!(err.kind(), ErrorKind::Provider);
	assert!(store.get("abc123").is_some());
	assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn transport_failure_keeps_pending_entry_for_retry() {
	let transport = ScriptedTransport::with_responses([
		Err("connection reset".to_owned()),
		Ok(HttpResponse::new(200, "oauth_token=tok&oauth_token_secret=sec")),
	]);
	let store = Arc::new(LruTokenStore::default());
	let broker = scripted_broker(transport.clone(), store.clone());
	let query = CallbackQuery::parse("oauth_token=abc123&oauth_verifier=v1");

	store.put("abc123", TokenSecret::new("shh"));

	let err = broker.complete_authorization(&query).await.expect_err("Transport errors must fail.");

	assert_eq!(err.kind(), ErrorKind::Transport);
	assert!(err.to_string().contains("connection reset"));
	assert!(store.get("abc123").is_some());

	let access = broker.complete_authorization(&query).await.expect("Retry should succeed.");

	assert_eq!(access, AccessToken::new("tok", "sec"));
	assert!(store.is_empty());
}

#[tokio::test]
async fn concurrent_flows_share_one_broker() {
	let responses = (0..8)
		.map(|i| Ok(HttpResponse::new(200, format!("oauth_token=t{i}&oauth_token_secret=s{i}"))))
		.collect::<Vec<_>>();
	let transport = ScriptedTransport::with_responses(responses);
	let store = Arc::new(LruTokenStore::default());
	let broker = scripted_broker(transport.clone(), store.clone());
	let handles = (0..8)
		.map(|_| {
			let broker = broker.clone();

			tokio::spawn(async move {
				broker.authorize_redirect(Vec::<(String, String)>::new()).await
			})
		})
		.collect::<Vec<_>>();

	for handle in handles {
		handle
			.await
			.expect("Flow task should not panic.")
			.expect("Request token leg should succeed.");
	}

	assert_eq!(store.len(), 8);

	for i in 0..8 {
		assert_eq!(
			store.get(&format!("t{i}")).as_ref().map(TokenSecret::expose),
			Some(format!("s{i}").as_str())
		);
	}
}
