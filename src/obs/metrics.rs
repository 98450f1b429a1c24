// self
use crate::obs::{FlowKind, FlowOutcome};

/// Bumps `oauth1_broker_flow_total{flow, outcome}` on the global recorder.
pub fn record_flow_outcome(kind: FlowKind, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(
		"oauth1_broker_flow_total",
		"flow" => kind.as_str(),
		"outcome" => outcome.as_str()
	)
	.increment(1);
	#[cfg(not(feature = "metrics"))]
	let _ = (kind, outcome);
}

/// Adds `count` to `oauth1_broker_pending_evictions_total`.
pub fn record_pending_evictions(count: usize) {
	#[cfg(feature = "metrics")]
	metrics::counter!("oauth1_broker_pending_evictions_total").increment(count as u64);
	#[cfg(not(feature = "metrics"))]
	let _ = count;
}
