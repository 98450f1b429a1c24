//! Broker-level error types shared across flows, the signer, and transports.

// self
use crate::_prelude::*;

/// Broker-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const BODY_PREVIEW_LIMIT: usize = 256;

/// Canonical broker error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Provider answered, but not with what the flow needs.
	#[error(transparent)]
	Provider(#[from] ProviderError),
	/// Callback references a request token the pending store does not hold.
	#[error("Request token `{token}` is unknown, expired, or was evicted.")]
	UnknownToken {
		/// The `oauth_token` value echoed by the provider (may be empty).
		token: String,
	},
	/// Signing could not proceed because of malformed configuration.
	#[error(transparent)]
	Signing(#[from] SigningError),
}
impl Error {
	/// Returns the coarse error category, suitable for choosing a user-facing message.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Transport(_) => ErrorKind::Transport,
			Self::Provider(_) => ErrorKind::Provider,
			Self::UnknownToken { .. } => ErrorKind::UnknownToken,
			Self::Signing(_) => ErrorKind::Signing,
		}
	}
}

/// Stable labels for [`Error`] variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// See [`Error::Transport`].
	Transport,
	/// See [`Error::Provider`].
	Provider,
	/// See [`Error::UnknownToken`].
	UnknownToken,
	/// See [`Error::Signing`].
	Signing,
}
impl ErrorKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ErrorKind::Transport => "transport",
			ErrorKind::Provider => "provider",
			ErrorKind::UnknownToken => "unknown_token",
			ErrorKind::Signing => "signing",
		}
	}
}
impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the provider: {source}")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the provider: {0}")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Failures where the provider responded but the response is unusable.
#[derive(Debug, ThisError)]
pub enum ProviderError {
	/// Provider returned a non-success HTTP status.
	#[error("Provider returned HTTP {status}: {body_preview}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Truncated response body.
		body_preview: String,
	},
	/// Provider reported an OAuth problem (`oauth_problem` response field).
	#[error("Provider reported OAuth problem `{problem}`.")]
	Problem {
		/// Problem code, e.g. `token_rejected`.
		problem: String,
		/// Optional human-readable advice supplied by the provider.
		advice: Option<String>,
		/// HTTP status code.
		status: u16,
	},
	/// Token response omitted a required field.
	#[error("Provider response is missing `{field}`: {body_preview}")]
	MissingField {
		/// Name of the absent field.
		field: &'static str,
		/// Truncated response body.
		body_preview: String,
	},
	/// Protected resource body could not be decoded into the requested type.
	#[error("Provider returned a body that could not be decoded.")]
	Decode {
		/// Structured parsing failure including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code.
		status: u16,
	},
}

/// Signing and configuration failures.
#[derive(Debug, ThisError)]
pub enum SigningError {
	/// A required endpoint was never configured.
	#[error("Missing {endpoint} endpoint.")]
	MissingEndpoint {
		/// Which endpoint is absent.
		endpoint: &'static str,
	},
	/// An endpoint URL cannot be parsed.
	#[error("The {endpoint} endpoint is not a valid URL.")]
	InvalidEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The signature method rejected the signing key.
	#[error("Signing key was rejected by the signature method.")]
	InvalidKey,
}

/// Truncates a response body so it can be embedded in error messages.
pub(crate) fn body_preview(body: &[u8]) -> String {
	let body = String::from_utf8_lossy(body);

	if body.chars().count() <= BODY_PREVIEW_LIMIT {
		return body.into_owned();
	}

	let mut buf = body.chars().take(BODY_PREVIEW_LIMIT).collect::<String>();

	buf.push('…');

	buf
}
