//! Transport primitives for signed provider calls.
//!
//! The module exposes [`OAuthHttpClient`] alongside [`SignedRequest`] and [`HttpResponse`] so
//! downstream crates can plug in their own HTTP stack. The broker only ever issues `GET`
//! requests carrying a single `Authorization` header, and reads back the status code and raw
//! body. Timeouts, retries, proxies, and redirect policy belong to the transport.

// self
use crate::{_prelude::*, error::TransportError};

/// Boxed future returned by [`OAuthHttpClient::get`].
pub type HttpFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of issuing signed OAuth 1.0a requests.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared by every flow
/// running against a [`Broker`](crate::flows::Broker), and the returned futures must be `Send`
/// so flows can hop executors.
pub trait OAuthHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Issues a `GET` for `request.url` with the `Authorization` header set to
	/// `request.authorization`.
	///
	/// Only failures that prevent a response from arriving (DNS, TCP, TLS, I/O) belong in the
	/// error; non-success statuses must be returned as an [`HttpResponse`].
	fn get(&self, request: SignedRequest) -> HttpFuture<'_, HttpResponse>;
}

/// Outbound request after signing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedRequest {
	/// Target URL, including any query string that was part of the signed base string.
	pub url: Url,
	/// Value for the `Authorization` header (`OAuth k="v",...`).
	pub authorization: String,
}

/// Status and body of a provider response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl HttpResponse {
	/// Creates a response from a status code and body.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl OAuthHttpClient for ReqwestHttpClient {
	fn get(&self, request: SignedRequest) -> HttpFuture<'_, HttpResponse> {
		Box::pin(async move {
			let response = self
				.0
				.get(request.url)
				.header(reqwest::header::AUTHORIZATION, request.authorization)
				.send()
				.await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(HttpResponse { status, body })
		})
	}
}
