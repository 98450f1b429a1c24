//! High-level OAuth 1.0a flow orchestration.
//!
//! A single authorization attempt moves through [`FlowStage`]s:
//! `Start → RequestTokenObtained → Redirected → Authorized | Failed`. The broker keeps no
//! per-attempt state of its own; the only thing carried across the redirect is the request
//! token's secret, parked in the [`PendingTokenStore`] under the `oauth_token` value.

pub mod access_token;
pub mod common;
pub mod request_token;
pub mod resource;

pub use common::*;

// self
use crate::{
	_prelude::*,
	auth::ConsumerCredentials,
	http::OAuthHttpClient,
	provider::ProviderDescriptor,
	signer::{HmacSha1, SignatureMethod},
	store::{LruTokenStore, PendingTokenStore},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Broker specialized for the crate's default reqwest transport.
pub type ReqwestBroker = Broker<ReqwestHttpClient>;

/// States of a single three-legged authorization attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowStage {
	/// Nothing has been sent to the provider yet.
	Start,
	/// Leg one succeeded and the secret is parked in the pending store.
	RequestTokenObtained,
	/// The user was sent to the provider; waiting for the verifier callback.
	Redirected,
	/// Leg three succeeded and the caller owns an access token.
	Authorized,
	/// Any leg failed; restart from [`Broker::initiate`].
	Failed,
}
impl FlowStage {
	/// Returns a stable label suitable for span fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowStage::Start => "start",
			FlowStage::RequestTokenObtained => "request_token_obtained",
			FlowStage::Redirected => "redirected",
			FlowStage::Authorized => "authorized",
			FlowStage::Failed => "failed",
		}
	}
}
impl Display for FlowStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Coordinates OAuth 1.0a flows against a single provider descriptor.
///
/// The broker owns the HTTP client, pending-token store, provider descriptor, and consumer
/// credentials. All of them are immutable after construction except the store, which serializes
/// its own access, so one broker can be shared across any number of concurrent flows.
pub struct Broker<C>
where
	C: ?Sized + OAuthHttpClient,
{
	/// HTTP client used for every outbound provider request.
	pub http_client: Arc<C>,
	/// Store parking request-token secrets between leg one and the callback.
	pub store: Arc<dyn PendingTokenStore>,
	/// Provider descriptor that defines OAuth endpoints and the callback.
	pub descriptor: ProviderDescriptor,
	/// Consumer key/secret used in every leg.
	pub credentials: ConsumerCredentials,
	/// Signature method applied to every outbound request.
	pub signature_method: Arc<dyn SignatureMethod>,
}
impl<C> Broker<C>
where
	C: ?Sized + OAuthHttpClient,
{
	/// Creates a broker that reuses the caller-provided transport.
	///
	/// The broker starts with its own [`LruTokenStore`] of default capacity and HMAC-SHA1
	/// signing.
	pub fn with_http_client(
		descriptor: ProviderDescriptor,
		credentials: ConsumerCredentials,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self {
			http_client: http_client.into(),
			store: Arc::new(LruTokenStore::default()),
			descriptor,
			credentials,
			signature_method: Arc::new(HmacSha1),
		}
	}

	/// Replaces the pending-token store, e.g. with a differently sized [`LruTokenStore`].
	pub fn with_store(mut self, store: Arc<dyn PendingTokenStore>) -> Self {
		self.store = store;

		self
	}

	/// Replaces the signature method.
	pub fn with_signature_method(mut self, method: Arc<dyn SignatureMethod>) -> Self {
		self.signature_method = method;

		self
	}
}
#[cfg(feature = "reqwest")]
impl Broker<ReqwestHttpClient> {
	/// Creates a new broker for the provided descriptor and consumer credentials.
	///
	/// The broker provisions its own reqwest-backed transport so callers do not need to pass
	/// HTTP handles explicitly.
	pub fn new(descriptor: ProviderDescriptor, credentials: ConsumerCredentials) -> Self {
		Self::with_http_client(descriptor, credentials, ReqwestHttpClient::default())
	}
}
impl<C> Clone for Broker<C>
where
	C: ?Sized + OAuthHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			store: self.store.clone(),
			descriptor: self.descriptor.clone(),
			credentials: self.credentials.clone(),
			signature_method: self.signature_method.clone(),
		}
	}
}
impl<C> Debug for Broker<C>
where
	C: ?Sized + OAuthHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Broker")
			.field("descriptor", &self.descriptor)
			.field("consumer_key", &self.credentials.key)
			.field("signature_method", &self.signature_method.name())
			.finish()
	}
}
