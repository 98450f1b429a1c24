// self
use crate::{_prelude::*, auth::ProviderId, flows::FlowStage, obs::FlowKind};

/// Span wrapping one OAuth 1.0a leg.
///
/// `stage` is declared up front so [`advance_stage`] can overwrite it from inside the leg.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Opens a span for `kind` against `provider`, starting at `stage`.
	pub fn new(kind: FlowKind, stage: FlowStage, provider: &ProviderId) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"oauth1_broker.flow",
				flow = kind.as_str(),
				provider = provider.as_str(),
				stage = stage.as_str()
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage, provider);

			Self {}
		}
	}

	/// Runs `fut` inside the span. The span is entered on every poll, never held across `.await`.
	pub fn instrument<Fut>(&self, fut: Fut) -> impl Future<Output = Fut::Output>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Records `stage` on the innermost active flow span.
pub fn advance_stage(stage: FlowStage) {
	#[cfg(feature = "tracing")]
	{
		tracing::Span::current().record("stage", stage.as_str());
		tracing::debug!(stage = stage.as_str(), "Flow stage reached.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = stage;
	}
}
