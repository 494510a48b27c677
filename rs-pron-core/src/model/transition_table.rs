use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Frozen log-probability table produced by training.
///
/// The outer key is the *current* n-gram, the inner key the *context* that
/// preceded it. For each current n-gram the inner values are
/// `ln(P(context | current))` over the contexts actually observed, so their
/// exponentials sum to 1.
///
/// The table has no mutating method: once built by
/// [`TransitionCounts::finalize`](super::transition_counts::TransitionCounts::finalize)
/// it can be shared freely between concurrent scorers.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TransitionTable {
	/// Width of the n-grams used as keys
	n: usize,

	/// current n-gram -> (context n-gram -> log-probability)
	entries: HashMap<String, HashMap<String, f64>>,
}

impl TransitionTable {
	pub(crate) fn new(n: usize, entries: HashMap<String, HashMap<String, f64>>) -> Self {
		Self { n, entries }
	}

	/// Width of the n-grams used as keys.
	pub fn ngram_width(&self) -> usize {
		self.n
	}

	/// Number of distinct current n-grams.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Whether `current` was observed as the second half of any transition.
	pub fn contains(&self, current: &str) -> bool {
		self.entries.contains_key(current)
	}

	/// Context distribution stored under `current`.
	pub fn get(&self, current: &str) -> Option<&HashMap<String, f64>> {
		self.entries.get(current)
	}

	/// `ln(P(context | current))`, `None` when the pair was never observed.
	pub fn log_probability(&self, current: &str, context: &str) -> Option<f64> {
		self.entries.get(current)?.get(context).copied()
	}

	/// Number of distinct contexts stored under `current` (0 if unknown).
	pub fn context_count(&self, current: &str) -> usize {
		self.entries.get(current).map_or(0, HashMap::len)
	}

	/// Iterates over the current n-grams.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}
}
