//! Shared helpers for flow implementations (callback parsing, signed calls, token responses).

// self
use crate::{
	_prelude::*,
	auth::ProviderId,
	error::{self, ProviderError},
	flows::{Broker, FlowStage},
	http::{HttpResponse, OAuthHttpClient, SignedRequest},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	signer::{self, OAUTH_TOKEN, OAUTH_TOKEN_SECRET, OAUTH_VERIFIER, OAuthParameters},
};

const OAUTH_PROBLEM: &str = "oauth_problem";
const OAUTH_PROBLEM_ADVICE: &str = "oauth_problem_advice";

/// Query parameters received on the callback endpoint after the user authorizes.
///
/// Repeated keys keep their first value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackQuery(Vec<(String, String)>);
impl CallbackQuery {
	/// Parses a raw `application/x-www-form-urlencoded` query string (without the leading `?`).
	pub fn parse(query: &str) -> Self {
		url::form_urlencoded::parse(query.as_bytes()).into_owned().collect()
	}

	/// Reads the query string of a full callback URL.
	pub fn from_url(url: &Url) -> Self {
		url.query_pairs().into_owned().collect()
	}

	/// Returns the first value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	/// The echoed `oauth_token`, when present and non-empty.
	pub fn oauth_token(&self) -> Option<&str> {
		self.get(OAUTH_TOKEN).filter(|value| !value.is_empty())
	}

	/// The `oauth_verifier`, when present and non-empty.
	pub fn oauth_verifier(&self) -> Option<&str> {
		self.get(OAUTH_VERIFIER).filter(|value| !value.is_empty())
	}
}
impl<K, V> FromIterator<(K, V)> for CallbackQuery
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

impl<C> Broker<C>
where
	C: ?Sized + OAuthHttpClient,
{
	/// Signs `params` for a `GET` to `url` and sends it through the transport.
	pub(crate) async fn signed_get(
		&self,
		url: &Url,
		mut params: OAuthParameters,
		token_secret: Option<&str>,
	) -> Result<HttpResponse> {
		let authorization = signer::sign_request(
			"GET",
			url,
			&mut params,
			self.signature_method.as_ref(),
			self.credentials.secret.expose(),
			token_secret,
		)?;
		let request = SignedRequest { url: url.clone(), authorization };

		Ok(self.http_client.get(request).await?)
	}
}

/// Runs one leg inside its span and counts attempt plus success or failure.
pub(crate) async fn observed<T, Fut>(
	kind: FlowKind,
	stage: FlowStage,
	provider: &ProviderId,
	fut: Fut,
) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = FlowSpan::new(kind, stage, provider);

	obs::record_flow_outcome(kind, FlowOutcome::Attempt);

	let result = span.instrument(fut).await;

	#[cfg(feature = "tracing")]
	if let Err(err) = &result {
		tracing::warn!(
			flow = kind.as_str(),
			provider = provider.as_str(),
			stage = FlowStage::Failed.as_str(),
			error_kind = err.kind().as_str(),
			"OAuth 1.0a leg failed: {err}"
		);
	}

	obs::record_flow_outcome(kind, FlowOutcome::of(&result));

	result
}

/// Extracts `oauth_token`/`oauth_token_secret` from a form-encoded token response.
pub(crate) fn parse_token_pair(response: &HttpResponse) -> Result<(String, String)> {
	let fields = url::form_urlencoded::parse(&response.body).into_owned().collect::<Vec<_>>();
	let field = |name: &str| {
		fields.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
	};

	if let Some(problem) = field(OAUTH_PROBLEM) {
		return Err(ProviderError::Problem {
			problem: problem.to_owned(),
			advice: field(OAUTH_PROBLEM_ADVICE).map(str::to_owned),
			status: response.status,
		}
		.into());
	}

	ensure_success(response)?;

	let token = required(field(OAUTH_TOKEN), OAUTH_TOKEN, response)?;
	let secret = required(field(OAUTH_TOKEN_SECRET), OAUTH_TOKEN_SECRET, response)?;

	Ok((token.to_owned(), secret.to_owned()))
}

/// Maps non-2xx responses to [`ProviderError::Status`].
pub(crate) fn ensure_success(response: &HttpResponse) -> Result<()> {
	if response.is_success() {
		Ok(())
	} else {
		Err(ProviderError::Status {
			status: response.status,
			body_preview: error::body_preview(&response.body),
		}
		.into())
	}
}

fn required<'a>(
	value: Option<&'a str>,
	field: &'static str,
	response: &HttpResponse,
) -> Result<&'a str> {
	value.filter(|value| !value.is_empty()).ok_or_else(|| {
		ProviderError::MissingField { field, body_preview: error::body_preview(&response.body) }
			.into()
	})
}
