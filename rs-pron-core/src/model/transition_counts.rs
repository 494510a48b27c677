use std::collections::HashMap;

use super::context_bucket::ContextBucket;
use super::tokenizer::{DEFAULT_NGRAM_WIDTH, ngrams_of};
use super::transition_table::TransitionTable;
use crate::error::{PronError, Result};

/// Raw transition counts gathered while training.
///
/// `TransitionCounts` is the mutable accumulator behind a
/// [`TransitionTable`]. Words are split into n-grams and every adjacent pair
/// `(previous, current)` increments the bucket of `current` at `previous`.
///
/// # Responsibilities
/// - Ingest normalized words
/// - Merge with another accumulator of the same width (map/reduce training)
/// - Produce the immutable log-probability table once counting is over
///
/// # Invariants
/// - `n` is always >= 1
/// - Each bucket in `buckets` is stored under its own key
#[derive(Clone, Debug)]
pub struct TransitionCounts {
	/// Width of the n-grams (1 for single characters)
	n: usize,

	/// Mapping from a current n-gram to the contexts seen before it
	buckets: HashMap<String, ContextBucket>,

	/// Number of lines ingested, including those too short to count
	words: usize,
}

impl TransitionCounts {
	/// Creates an empty accumulator for n-grams of width `n`.
	///
	/// # Errors
	/// Returns `InvalidNgramWidth` if `n == 0`.
	pub fn new(n: usize) -> Result<Self> {
		if n == 0 {
			return Err(PronError::InvalidNgramWidth(n));
		}
		Ok(Self { n, buckets: HashMap::new(), words: 0 })
	}

	/// Width of the counted n-grams.
	pub fn ngram_width(&self) -> usize {
		self.n
	}

	/// Number of words ingested so far.
	pub fn word_count(&self) -> usize {
		self.words
	}

	/// Number of distinct current n-grams seen so far.
	pub fn len(&self) -> usize {
		self.buckets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buckets.is_empty()
	}

	/// Returns the bucket of contexts observed before `current`.
	pub fn bucket(&self, current: &str) -> Option<&ContextBucket> {
		self.buckets.get(current)
	}

	/// Adds one word (one line of a word list) to the counts.
	///
	/// # Notes
	/// - The word is trimmed and lowercased.
	/// - Words too short to produce two n-grams add no transition.
	/// - Duplicates are counted again.
	pub fn add_word(&mut self, word: &str) {
		self.words += 1;

		let ngrams = ngrams_of(word, self.n);
		for pair in ngrams.windows(2) {
			let (previous, current) = (&pair[0], &pair[1]);
			self.buckets
				.entry(current.clone())
				.or_insert_with(|| ContextBucket::new(current))
				.add_context(previous);
		}
	}

	/// Merges another accumulator into this one.
	///
	/// Counts for matching buckets and contexts are summed, so merging is
	/// commutative and associative.
	///
	/// # Errors
	/// Returns `WidthMismatch` if the widths differ.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.n != other.n {
			return Err(PronError::WidthMismatch { expected: self.n, found: other.n });
		}

		for (key, bucket) in &other.buckets {
			if let Some(existing) = self.buckets.get_mut(key) {
				existing.merge(bucket)?;
			} else {
				self.buckets.insert(key.clone(), bucket.clone());
			}
		}
		self.words += other.words;

		Ok(())
	}

	/// Normalizes every bucket into log-probabilities and freezes the result.
	pub fn finalize(self) -> TransitionTable {
		let entries = self
			.buckets
			.into_iter()
			.map(|(key, bucket)| (key, bucket.into_log_probabilities()))
			.collect();
		TransitionTable::new(self.n, entries)
	}
}

impl Default for TransitionCounts {
	/// An empty single-character accumulator.
	fn default() -> Self {
		Self { n: DEFAULT_NGRAM_WIDTH, buckets: HashMap::new(), words: 0 }
	}
}
