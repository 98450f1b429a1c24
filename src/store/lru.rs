//! Thread-safe, byte-bounded LRU [`PendingTokenStore`].

// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	obs,
	store::{self, DEFAULT_CAPACITY, PendingTokenStore},
};

/// Capacity-bounded store that evicts the least-recently-touched entries first.
///
/// Each entry costs [`entry_cost`](store::entry_cost) bytes. A `get` counts as a touch.
/// Inserting past capacity evicts from the cold end until the total fits, which may include the
/// entry that was just inserted when it alone exceeds the budget.
#[derive(Debug)]
pub struct LruTokenStore {
	capacity: usize,
	inner: Mutex<LruState>,
}
impl LruTokenStore {
	/// Creates a store holding at most `capacity` bytes.
	pub fn with_capacity(capacity: usize) -> Self {
		Self { capacity, inner: Mutex::new(LruState::default()) }
	}

	/// Configured budget in bytes.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Bytes currently accounted across all entries.
	pub fn size(&self) -> usize {
		self.inner.lock().size
	}

	/// Number of entries held.
	pub fn len(&self) -> usize {
		self.inner.lock().entries.len()
	}

	/// Returns `true` when no entries are held.
	pub fn is_empty(&self) -> bool {
		self.inner.lock().entries.is_empty()
	}
}
impl Default for LruTokenStore {
	fn default() -> Self {
		Self::with_capacity(DEFAULT_CAPACITY)
	}
}
impl PendingTokenStore for LruTokenStore {
	fn put(&self, token: &str, secret: TokenSecret) {
		let mut state = self.inner.lock();

		state.insert(token.to_owned(), secret);

		let evicted = state.evict_to(self.capacity);

		if evicted > 0 {
			obs::record_pending_evictions(evicted);

			#[cfg(feature = "tracing")]
			tracing::debug!(
				evicted,
				size = state.size,
				capacity = self.capacity,
				"Evicted pending request tokens."
			);
		}
	}

	fn get(&self, token: &str) -> Option<TokenSecret> {
		self.inner.lock().touch(token)
	}

	fn remove(&self, token: &str) -> Option<TokenSecret> {
		self.inner.lock().take(token)
	}
}

struct Entry {
	secret: TokenSecret,
	tick: u64,
}

/// Entries plus a recency index keyed by a monotonically increasing tick.
#[derive(Default)]
struct LruState {
	entries: HashMap<String, Entry>,
	recency: BTreeMap<u64, String>,
	size: usize,
	clock: u64,
}
impl LruState {
	fn next_tick(&mut self) -> u64 {
		self.clock += 1;

		self.clock
	}

	fn insert(&mut self, token: String, secret: TokenSecret) {
		self.take(&token);

		let tick = self.next_tick();

		self.size += store::entry_cost(&token, &secret);
		self.recency.insert(tick, token.clone());
		self.entries.insert(token, Entry { secret, tick });
	}

	fn touch(&mut self, token: &str) -> Option<TokenSecret> {
		let entry = self.entries.get_mut(token)?;

		self.clock += 1;

		let tick = self.clock;

		if let Some(key) = self.recency.remove(&entry.tick) {
			self.recency.insert(tick, key);
		}

		entry.tick = tick;

		Some(entry.secret.clone())
	}

	fn take(&mut self, token: &str) -> Option<TokenSecret> {
		let entry = self.entries.remove(token)?;

		self.recency.remove(&entry.tick);
		self.size -= store::entry_cost(token, &entry.secret);

		Some(entry.secret)
	}

	fn evict_to(&mut self, capacity: usize) -> usize {
		let mut evicted = 0;

		while self.size > capacity {
			let Some((_, token)) = self.recency.pop_first() else { break };

			if let Some(entry) = self.entries.remove(&token) {
				self.size -= store::entry_cost(&token, &entry.secret);
			}

			evicted += 1;
		}

		evicted
	}
}
impl Debug for LruState {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("LruState")
			.field("entries", &self.entries.len())
			.field("size", &self.size)
			.finish()
	}
}
