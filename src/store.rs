//! Pending-token storage: the bridge between leg one and the verifier callback.
//!
//! A request token's secret has to survive the user's trip to the provider's authorization page,
//! which may take anywhere from seconds to minutes. Stores are keyed by the `oauth_token` value
//! and hold only the paired secret. Abandoned flows are never cleaned up explicitly; bounded
//! implementations rely on capacity pressure to evict them.

pub mod lru;

pub use lru::LruTokenStore;

// self
use crate::auth::TokenSecret;

/// Default [`LruTokenStore`] budget in bytes (1 MiB).
pub const DEFAULT_CAPACITY: usize = 1_048_576;

/// Bytes a pending entry charges against a bounded store.
pub fn entry_cost(token: &str, secret: &TokenSecret) -> usize {
	token.len() + secret.len()
}

/// Storage backend contract for pending request-token secrets.
///
/// Implementations must serialize `put`, `get`, `remove`, and any eviction they perform so that
/// concurrent flows for different users never observe each other's partial updates.
pub trait PendingTokenStore
where
	Self: Send + Sync,
{
	/// Inserts or replaces the secret paired with `token`.
	///
	/// Bounded stores may evict other entries, or fail to retain this one, to stay within budget.
	fn put(&self, token: &str, secret: TokenSecret);

	/// Returns the secret paired with `token`, if it is still held.
	fn get(&self, token: &str) -> Option<TokenSecret>;

	/// Drops the entry for `token`, returning its secret.
	fn remove(&self, token: &str) -> Option<TokenSecret>;
}
