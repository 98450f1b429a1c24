//! Request and access token pairs exchanged during the three-legged flow.

// self
use crate::{_prelude::*, auth::TokenSecret, store};

/// Short-lived token pair issued in leg one and used only to obtain user authorization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestToken {
	/// The `oauth_token` value echoed back by the provider at the callback.
	pub token: String,
	/// The `oauth_token_secret` needed to sign the access-token exchange.
	pub secret: TokenSecret,
}
impl RequestToken {
	/// Creates a request token pair.
	pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { token: token.into(), secret: TokenSecret::new(secret) }
	}

	/// Bytes this pair costs in a bounded pending-token store.
	pub fn size(&self) -> usize {
		store::entry_cost(&self.token, &self.secret)
	}
}

/// Long-lived token pair used to sign protected-resource requests.
///
/// Ownership passes to the caller once [`complete_authorization`] returns; the broker keeps no
/// copy.
///
/// [`complete_authorization`]: crate::flows::Broker::complete_authorization
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
	/// The `oauth_token` value.
	pub token: String,
	/// The `oauth_token_secret` value.
	pub secret: TokenSecret,
}
impl AccessToken {
	/// Creates an access token pair.
	pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { token: token.into(), secret: TokenSecret::new(secret) }
	}
}
