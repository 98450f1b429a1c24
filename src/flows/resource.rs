//! Leg four: signed calls to protected resources with an access token.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::ProviderError,
	flows::{Broker, FlowStage, common},
	http::OAuthHttpClient,
	obs::FlowKind,
	signer::{self, OAUTH_TOKEN},
};

impl<C> Broker<C>
where
	C: ?Sized + OAuthHttpClient,
{
	/// Fetches `endpoint` signed with `token` and decodes the JSON body into `T`.
	///
	/// Non-2xx statuses fail with [`ProviderError::Status`]; bodies that do not match `T` fail
	/// with [`ProviderError::Decode`], whose source names the offending JSON path.
	pub async fn fetch_protected_resource<T>(
		&self,
		endpoint: &Url,
		token: &AccessToken,
	) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let provider = &self.descriptor.id;

		common::observed(FlowKind::ProtectedResource, FlowStage::Authorized, provider, async move {
			let mut params = signer::new_headers(&self.credentials.key);

			params.insert(OAUTH_TOKEN, token.token.as_str());

			let response = self.signed_get(endpoint, params, Some(token.secret.expose())).await?;

			common::ensure_success(&response)?;

			let mut de = serde_json::Deserializer::from_slice(&response.body);
			let payload = serde_path_to_error::deserialize(&mut de)
				.map_err(|source| ProviderError::Decode { source, status: response.status })?;

			Ok(payload)
		})
		.await
	}

	/// Builds a signed `Authorization` header for an arbitrary request.
	///
	/// Use this when issuing calls through another HTTP stack (e.g. `POST`s). Only the OAuth
	/// parameters enter the base string; the URL is signed exactly as given, query included.
	/// Pass `None` as `token` for consumer-only (two-legged) requests.
	pub fn authorization_header(
		&self,
		method: &str,
		url: &Url,
		token: Option<&AccessToken>,
	) -> Result<String> {
		let mut params = signer::new_headers(&self.credentials.key);

		if let Some(token) = token {
			params.insert(OAUTH_TOKEN, token.token.as_str());
		}

		let header = signer::sign_request(
			&method.to_ascii_uppercase(),
			url,
			&mut params,
			self.signature_method.as_ref(),
			self.credentials.secret.expose(),
			token.map(|token| token.secret.expose()),
		)?;

		Ok(header)
	}
}
