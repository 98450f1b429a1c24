//! Leg three: trade the verified request token for an access token.

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::ProviderError,
	flows::{Broker, CallbackQuery, FlowStage, common},
	http::OAuthHttpClient,
	obs::{self, FlowKind},
	signer::{self, OAUTH_TOKEN, OAUTH_VERIFIER},
};

impl<C> Broker<C>
where
	C: ?Sized + OAuthHttpClient,
{
	/// Returns `true` when the callback carries a non-empty `oauth_verifier`.
	///
	/// A `false` result means the provider has not authorized anything yet and the hosting layer
	/// should start over with [`initiate`](Self::initiate).
	pub fn is_callback_complete(&self, query: &CallbackQuery) -> bool {
		query.oauth_verifier().is_some()
	}

	/// Exchanges the callback's `oauth_token` + `oauth_verifier` for an access token.
	///
	/// The request is signed with `consumer_secret&request_token_secret`, where the secret comes
	/// from the pending store. A token the store does not hold (never issued, evicted, or forged)
	/// fails with [`Error::UnknownToken`] before anything is sent. On success the pending entry is
	/// dropped; on failure it is left in place so the callback can be retried.
	pub async fn complete_authorization(&self, query: &CallbackQuery) -> Result<AccessToken> {
		let provider = &self.descriptor.id;

		common::observed(FlowKind::AccessToken, FlowStage::Redirected, provider, async move {
			let token = query.oauth_token().unwrap_or_default();
			let secret = self
				.store
				.get(token)
				.ok_or_else(|| Error::UnknownToken { token: token.to_owned() })?;
			let verifier = query.oauth_verifier().ok_or(ProviderError::MissingField {
				field: OAUTH_VERIFIER,
				body_preview: String::new(),
			})?;
			let mut params = signer::new_headers(&self.credentials.key);

			params.insert(OAUTH_TOKEN, token).insert(OAUTH_VERIFIER, verifier);

			let response = self
				.signed_get(&self.descriptor.endpoints.access_token, params, Some(secret.expose()))
				.await?;
			let (access_token, access_secret) = common::parse_token_pair(&response)?;

			self.store.remove(token);

			obs::advance_stage(FlowStage::Authorized);

			Ok(AccessToken::new(access_token, access_secret))
		})
		.await
	}
}
