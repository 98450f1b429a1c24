//! Leg one: obtain a request token and build the user-authorization redirect.
//!
//! [`Broker::initiate`] signs a `GET` to the request-token endpoint with only the consumer
//! secret, parks the returned `oauth_token_secret` in the pending store under its
//! `oauth_token`, and hands back the URL the hosting web layer should redirect the user to
//! (typically with `303 See Other`).

// self
use crate::{
	_prelude::*,
	auth::RequestToken,
	flows::{Broker, FlowStage, common},
	http::OAuthHttpClient,
	obs::{self, FlowKind},
	signer::{self, OAUTH_CALLBACK, OAUTH_TOKEN},
};

impl<C> Broker<C>
where
	C: ?Sized + OAuthHttpClient,
{
	/// Fetches a request token and returns the authorization URL for `endpoint`.
	///
	/// `extra_params` are appended to `endpoint`'s query (after any query it already carries),
	/// followed by `oauth_token`. Nothing is stored when the provider call fails.
	pub async fn initiate<I, K, V>(&self, endpoint: &Url, extra_params: I) -> Result<Url>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let provider = &self.descriptor.id;

		common::observed(FlowKind::RequestToken, FlowStage::Start, provider, async move {
			let request_token = self.fetch_request_token().await?;

			obs::advance_stage(FlowStage::RequestTokenObtained);

			let mut url = endpoint.clone();

			{
				let mut pairs = url.query_pairs_mut();

				for (key, value) in extra_params {
					pairs.append_pair(key.as_ref(), value.as_ref());
				}

				pairs.append_pair(OAUTH_TOKEN, &request_token.token);
			}

			let RequestToken { token, secret } = request_token;

			self.store.put(&token, secret);

			Ok(url)
		})
		.await
	}

	/// [`initiate`](Self::initiate) against the descriptor's own authorization endpoint.
	pub async fn authorize_redirect<I, K, V>(&self, extra_params: I) -> Result<Url>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		self.initiate(&self.descriptor.endpoints.authorize, extra_params).await
	}

	async fn fetch_request_token(&self) -> Result<RequestToken> {
		let mut params = signer::new_headers(&self.credentials.key);

		params.insert(OAUTH_CALLBACK, self.descriptor.callback.as_str());

		let response =
			self.signed_get(&self.descriptor.endpoints.request_token, params, None).await?;
		let (token, secret) = common::parse_token_pair(&response)?;

		Ok(RequestToken::new(token, secret))
	}
}
