//! Consumer credentials shared read-only by every flow.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Consumer key/secret pair registered with the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerCredentials {
	/// Public consumer key sent as `oauth_consumer_key`.
	pub key: String,
	/// Consumer secret; the first half of every signing key.
	pub secret: TokenSecret,
}
impl ConsumerCredentials {
	/// Creates credentials from a consumer key and secret.
	pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { key: key.into(), secret: TokenSecret::new(secret) }
	}
}
