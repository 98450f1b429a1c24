//! Optional observability for OAuth 1.0a legs.
//!
//! Both halves compile to no-ops unless their Cargo feature is on:
//!
//! - `tracing`: each leg runs inside an `oauth1_broker.flow` span carrying `flow`, `provider` and
//!   a `stage` field that advances as the leg progresses.
//! - `metrics`: `oauth1_broker_flow_total{flow, outcome}` counts attempts, successes and failures;
//!   `oauth1_broker_pending_evictions_total` counts request tokens pushed out of the LRU store.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Protocol leg a span or counter belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// Leg one: request token + authorization redirect.
	RequestToken,
	/// Leg three: verifier exchange for an access token.
	AccessToken,
	/// Signed call to a protected resource.
	ProtectedResource,
}
impl FlowKind {
	/// Label used for the `flow` span field and metric label.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::RequestToken => "request_token",
			FlowKind::AccessToken => "access_token",
			FlowKind::ProtectedResource => "protected_resource",
		}
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Value of the `outcome` metric label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// A leg started.
	Attempt,
	/// The leg returned `Ok`.
	Success,
	/// The leg returned `Err`.
	Failure,
}
impl FlowOutcome {
	/// Maps a finished leg to [`Success`](Self::Success) or [`Failure`](Self::Failure).
	pub fn of<T, E>(result: &Result<T, E>) -> Self {
		if result.is_ok() { FlowOutcome::Success } else { FlowOutcome::Failure }
	}

	/// Label used for the `outcome` metric label.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
