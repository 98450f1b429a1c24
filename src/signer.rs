//! OAuth 1.0a request signing: base-string canonicalization, HMAC-SHA1 signatures, and
//! `Authorization` header serialization.
//!
//! Every function here is pure. The only non-determinism in a signed request comes from
//! [`new_headers`], which draws a fresh nonce and reads the clock.
//!
//! The base string double-escapes its parameter section: each value is percent-encoded, the
//! resulting `key=value` pair is percent-encoded again, and the pairs are joined with an
//! encoded ampersand (`%26`). Providers that validate against this layout reject the
//! single-escaped RFC 5849 form, so the two must not be mixed.

pub mod method;
pub mod params;

pub use method::*;
pub use params::*;

// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
// self
use crate::{_prelude::*, error::SigningError};

/// Everything except the unreserved set `A-Z a-z 0-9 - . _ ~`.
const OAUTH_ENCODE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes `value`, leaving only unreserved characters untouched.
pub fn percent_encode(value: &str) -> String {
	utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Builds the signing key `encode(consumer_secret)&encode(token_secret)`.
///
/// A missing token secret (leg one) yields a key ending in a bare `&`.
pub fn signing_key(consumer_secret: &str, token_secret: Option<&str>) -> String {
	format!("{}&{}", percent_encode(consumer_secret), percent_encode(token_secret.unwrap_or("")))
}

/// Builds the canonical signature base string for `method`, `url`, and `params`.
///
/// Keys are sorted byte-wise, so the result does not depend on the parameter set's iteration
/// order.
pub fn build_base_string(method: &str, url: &str, params: &OAuthParameters) -> String {
	let mut base = format!("{method}&{}", percent_encode(url));

	for (idx, (key, value)) in params.sorted().into_iter().enumerate() {
		if idx == 0 {
			base.push('&');
		} else {
			base.push_str(&percent_encode("&"));
		}

		base.push_str(&percent_encode(&format!("{key}={}", percent_encode(value))));
	}

	base
}

/// Computes the base64-encoded HMAC-SHA1 digest of `base_string` under `key`.
pub fn sign(base_string: &str, key: &str) -> Result<String, SigningError> {
	HmacSha1.sign(base_string, key)
}

/// Serializes `params` as `OAuth k1="v1",k2="v2"` with keys in byte-wise order.
///
/// Values are emitted verbatim; they must already be in their final wire form.
pub fn build_authorization_header(params: &OAuthParameters) -> String {
	let mut header = String::from("OAuth ");

	for (idx, (key, value)) in params.sorted().into_iter().enumerate() {
		if idx > 0 {
			header.push(',');
		}

		header.push_str(key);
		header.push_str("=\"");
		header.push_str(value);
		header.push('"');
	}

	header
}

/// Signs a fully populated parameter set in place and returns the `Authorization` header.
///
/// `params` must already hold every member except `oauth_signature`; the signature is computed
/// over them and then inserted alongside.
pub fn sign_request(
	method: &str,
	url: &Url,
	params: &mut OAuthParameters,
	signature_method: &dyn SignatureMethod,
	consumer_secret: &str,
	token_secret: Option<&str>,
) -> Result<String, SigningError> {
	params.insert(OAUTH_SIGNATURE_METHOD, signature_method.name());

	let base = build_base_string(method, url.as_str(), params);
	let key = signing_key(consumer_secret, token_secret);
	let signature = signature_method.sign(&base, &key)?;

	params.insert(OAUTH_SIGNATURE, signature);

	Ok(build_authorization_header(params))
}
