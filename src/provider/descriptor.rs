//! Provider descriptor data structures shared by all flows.

/// Builder API for assembling provider descriptors.
pub mod builder;

pub use builder::*;

// self
use crate::{_prelude::*, auth::ProviderId};

/// Callback value for providers that display the verifier instead of redirecting.
pub const OUT_OF_BAND_CALLBACK: &str = "oob";

/// Endpoint set declared by a provider descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoints {
	/// Leg one: issues request tokens.
	pub request_token: Url,
	/// Leg two: where the user authorizes the request token.
	pub authorize: Url,
	/// Leg three: trades a verified request token for an access token.
	pub access_token: Url,
}

/// Immutable provider descriptor consumed by flows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
	/// Descriptor identifier.
	pub id: ProviderId,
	/// Endpoint definitions exposed by the provider.
	pub endpoints: ProviderEndpoints,
	/// Value sent as `oauth_callback` in leg one; an absolute URL or [`OUT_OF_BAND_CALLBACK`].
	pub callback: String,
}
impl ProviderDescriptor {
	/// Creates a new builder for the provided identifier.
	pub fn builder(id: ProviderId) -> ProviderDescriptorBuilder {
		ProviderDescriptorBuilder::new(id)
	}

	/// Returns `true` when the provider shows the verifier to the user instead of redirecting.
	pub fn is_out_of_band(&self) -> bool {
		self.callback == OUT_OF_BAND_CALLBACK
	}
}
