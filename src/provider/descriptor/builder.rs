// self
use crate::{
	_prelude::*,
	auth::ProviderId,
	error::SigningError,
	provider::{OUT_OF_BAND_CALLBACK, ProviderDescriptor, ProviderEndpoints},
};

/// Builder for [`ProviderDescriptor`] values.
///
/// Endpoints are kept as raw strings until [`build`](Self::build) so every parsing failure is
/// reported in one place.
#[derive(Debug)]
pub struct ProviderDescriptorBuilder {
	/// Identifier for the descriptor being constructed.
	pub id: ProviderId,
	/// Request-token endpoint.
	pub request_token_endpoint: Option<String>,
	/// Authorization endpoint.
	pub authorize_endpoint: Option<String>,
	/// Access-token endpoint.
	pub access_token_endpoint: Option<String>,
	/// Callback URL; defaults to [`OUT_OF_BAND_CALLBACK`].
	pub callback: Option<String>,
}
impl ProviderDescriptorBuilder {
	/// Creates a new builder seeded with the provided identifier.
	pub fn new(id: ProviderId) -> Self {
		Self {
			id,
			request_token_endpoint: None,
			authorize_endpoint: None,
			access_token_endpoint: None,
			callback: None,
		}
	}

	/// Sets the request-token endpoint.
	pub fn request_token_endpoint(mut self, url: &str) -> Self {
		self.request_token_endpoint = Some(url.to_owned());

		self
	}

	/// Sets the authorization endpoint.
	pub fn authorize_endpoint(mut self, url: &str) -> Self {
		self.authorize_endpoint = Some(url.to_owned());

		self
	}

	/// Sets the access-token endpoint.
	pub fn access_token_endpoint(mut self, url: &str) -> Self {
		self.access_token_endpoint = Some(url.to_owned());

		self
	}

	/// Sets the callback URL sent in leg one.
	pub fn callback(mut self, callback: &str) -> Self {
		self.callback = Some(callback.to_owned());

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<ProviderDescriptor, SigningError> {
		let endpoints = ProviderEndpoints {
			request_token: parse_endpoint("request_token", self.request_token_endpoint)?,
			authorize: parse_endpoint("authorize", self.authorize_endpoint)?,
			access_token: parse_endpoint("access_token", self.access_token_endpoint)?,
		};
		let callback = match self.callback {
			Some(callback) if callback != OUT_OF_BAND_CALLBACK => {
				Url::parse(&callback).map_err(|source| SigningError::InvalidEndpoint {
					endpoint: "callback",
					source,
				})?;

				callback
			},
			_ => OUT_OF_BAND_CALLBACK.to_owned(),
		};

		Ok(ProviderDescriptor { id: self.id, endpoints, callback })
	}
}

fn parse_endpoint(endpoint: &'static str, raw: Option<String>) -> Result<Url, SigningError> {
	let raw = raw.ok_or(SigningError::MissingEndpoint { endpoint })?;

	Url::parse(&raw).map_err(|source| SigningError::InvalidEndpoint { endpoint, source })
}
