//! Signature method strategy and the HMAC-SHA1 implementation.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha1::Sha1;
// self
use crate::error::SigningError;

/// Value of `oauth_signature_method` for [`HmacSha1`].
pub const HMAC_SHA1: &str = "HMAC-SHA1";

/// Strategy hook that turns a base string and signing key into `oauth_signature`.
///
/// Providers with quirks in how the digest is produced can supply their own implementation to
/// [`Broker::with_signature_method`](crate::flows::Broker::with_signature_method) instead of
/// forking the flows.
pub trait SignatureMethod
where
	Self: Send + Sync,
{
	/// Name advertised in `oauth_signature_method`.
	fn name(&self) -> &'static str;

	/// Signs `base_string` with `key`.
	fn sign(&self, base_string: &str, key: &str) -> Result<String, SigningError>;
}

/// HMAC-SHA1 over the base string, base64-encoded with padding.
#[derive(Clone, Copy, Debug, Default)]
pub struct HmacSha1;
impl SignatureMethod for HmacSha1 {
	fn name(&self) -> &'static str {
		HMAC_SHA1
	}

	fn sign(&self, base_string: &str, key: &str) -> Result<String, SigningError> {
		let mut mac = <Hmac<Sha1>>::new_from_slice(key.as_bytes())
			.map_err(|_| SigningError::InvalidKey)?;

		mac.update(base_string.as_bytes());

		Ok(STANDARD.encode(mac.finalize().into_bytes()))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn hmac_sha1_accepts_empty_key() {
		let signature = HmacSha1.sign("GET&x&y", "").expect("HMAC accepts any key length.");

		assert_eq!(signature.len(), 28);
		assert!(signature.ends_with('='));
	}
}
