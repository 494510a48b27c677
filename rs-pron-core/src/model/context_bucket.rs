use std::collections::HashMap;

use crate::error::{PronError, Result};

/// Counts of the contexts observed right before one current n-gram.
///
/// A `ContextBucket` is keyed by the *current* n-gram (`key`) and stores how
/// many times each *preceding* n-gram was seen in front of it. Once training
/// is over the bucket is normalized over its contexts, giving a distribution
/// of "what came before" rather than "what comes next".
///
/// ## Responsibilities:
/// - Accumulate context occurrences during training
/// - Merge with another bucket having the same key (parallel counting)
/// - Convert counts to natural-log probabilities
///
/// ## Invariants
/// - All contexts belong to the same `key`
/// - Each context occurrence count is strictly positive
#[derive(Clone, Debug, PartialEq)]
pub struct ContextBucket {
	/// Current n-gram this bucket describes.
	key: String,
	/// Preceding n-grams and how often each one was observed.
	/// Example: { "a" => 2, "c" => 1 } for key "t"
	contexts: HashMap<String, usize>,
}

impl ContextBucket {
	/// Creates a new empty bucket for the given current n-gram.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			contexts: HashMap::new(),
		}
	}

	/// Records one more occurrence of `context` before the key.
	pub fn add_context(&mut self, context: &str) {
		*self.contexts.entry(context.to_owned()).or_insert(0) += 1;
	}

	/// Occurrence count of `context`, 0 if never seen.
	pub fn count(&self, context: &str) -> usize {
		self.contexts.get(context).copied().unwrap_or(0)
	}

	/// Sum of all context occurrences.
	pub fn total(&self) -> usize {
		self.contexts.values().sum()
	}

	/// Merges another bucket into this one, summing counts.
	///
	/// # Errors
	/// Returns `KeyMismatch` if the bucket keys differ.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.key != other.key {
			return Err(PronError::KeyMismatch {
				expected: self.key.clone(),
				found: other.key.clone(),
			});
		}

		for (context, occurrence) in &other.contexts {
			*self.contexts.entry(context.clone()).or_insert(0) += *occurrence;
		}

		Ok(())
	}

	/// Converts the counts into `ln(count / total)` per context.
	pub fn into_log_probabilities(self) -> HashMap<String, f64> {
		let total = self.total() as f64;
		self.contexts
			.into_iter()
			.map(|(context, occurrence)| (context, (occurrence as f64 / total).ln()))
			.collect()
	}
}
