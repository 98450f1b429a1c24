//! OAuth protocol parameter names and the parameter set carried by every signed request.

// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::_prelude::*;

/// `oauth_callback`.
pub const OAUTH_CALLBACK: &str = "oauth_callback";
/// `oauth_consumer_key`.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
/// `oauth_nonce`.
pub const OAUTH_NONCE: &str = "oauth_nonce";
/// `oauth_signature`.
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
/// `oauth_signature_method`.
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
/// `oauth_timestamp`.
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
/// `oauth_token`.
pub const OAUTH_TOKEN: &str = "oauth_token";
/// `oauth_token_secret`.
pub const OAUTH_TOKEN_SECRET: &str = "oauth_token_secret";
/// `oauth_verifier`.
pub const OAUTH_VERIFIER: &str = "oauth_verifier";
/// `oauth_version`.
pub const OAUTH_VERSION: &str = "oauth_version";

/// Protocol version advertised in `oauth_version`.
pub const OAUTH_VERSION_1_0: &str = "1.0";

// 32 alphanumerics carry ~190 bits of entropy.
const NONCE_LEN: usize = 32;

/// Unordered mapping from OAuth parameter name to value.
///
/// Iteration order is unspecified; signing and header serialization sort keys themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OAuthParameters(HashMap<String, String>);
impl OAuthParameters {
	/// Inserts or replaces a parameter.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.0.insert(key.into(), value.into());

		self
	}

	/// Removes a parameter, returning its value.
	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.0.remove(key)
	}

	/// Returns the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Returns `true` when `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no parameters are present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates parameters in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Returns the parameters sorted byte-wise by key.
	pub fn sorted(&self) -> Vec<(&str, &str)> {
		let mut pairs = self.iter().collect::<Vec<_>>();

		pairs.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));

		pairs
	}
}
impl<K, V> FromIterator<(K, V)> for OAuthParameters
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}
}
impl<K, V> Extend<(K, V)> for OAuthParameters
where
	K: Into<String>,
	V: Into<String>,
{
	fn extend<I>(&mut self, iter: I)
	where
		I: IntoIterator<Item = (K, V)>,
	{
		self.0.extend(iter.into_iter().map(|(key, value)| (key.into(), value.into())));
	}
}

/// Produces the five mandatory parameters with a fresh nonce and the current timestamp.
pub fn new_headers(consumer_key: &str) -> OAuthParameters {
	let mut params = OAuthParameters::default();

	params
		.insert(OAUTH_CONSUMER_KEY, consumer_key)
		.insert(OAUTH_NONCE, new_nonce())
		.insert(OAUTH_SIGNATURE_METHOD, super::HMAC_SHA1)
		.insert(OAUTH_TIMESTAMP, OffsetDateTime::now_utc().unix_timestamp().to_string())
		.insert(OAUTH_VERSION, OAUTH_VERSION_1_0);

	params
}

/// Draws a nonce from the thread-local CSPRNG, which the OS seeds.
pub fn new_nonce() -> String {
	rand::rng().sample_iter(Alphanumeric).take(NONCE_LEN).map(char::from).collect()
}
