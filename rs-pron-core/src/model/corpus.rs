use std::path::Path;
use std::sync::mpsc;
use std::thread;

use log::{debug, info};

use super::scorer;
use super::transition_counts::TransitionCounts;
use super::transition_table::TransitionTable;
use crate::config::{Config, DEFAULT_REFERENCE_WORD};
use crate::error::Result;
use crate::io::read_file;

/// A trained pronounceability model.
///
/// A `Corpus` owns the frozen [`TransitionTable`] built from one or more word
/// lists, plus the reference word used when a comparison has no explicit
/// second word. It is never mutated after construction, so a single instance
/// can be scored from many threads at once.
#[derive(Clone, Debug)]
pub struct Corpus {
	table: TransitionTable,
	reference_word: String,
}

impl Corpus {
	/// Trains a model of width `n` from line-delimited word lists.
	///
	/// # Behavior
	/// - Reads every source fully; the first unreadable one aborts training.
	/// - Splits all lines into chunks (based on CPU cores * factor).
	/// - Counts each chunk on its own thread into a partial `TransitionCounts`.
	/// - Merges the partial counts, then converts them to log-probabilities.
	///
	/// # Errors
	/// - `SourceUnavailable` if a word list cannot be opened or read.
	/// - `InvalidNgramWidth` if `n == 0`.
	///
	/// # Notes
	/// - No source at all (or only short words) gives an empty table; scoring
	///   against it later fails with `EmptyModel`.
	pub fn train<P: AsRef<Path>>(sources: &[P], n: usize) -> Result<Self> {
		// Fail before any I/O on a bad width
		TransitionCounts::new(n)?;

		let mut lines = Vec::new();
		for source in sources {
			let source_lines = read_file(source)?;
			debug!("read {} lines from {}", source_lines.len(), source.as_ref().display());
			lines.extend(source_lines);
		}

		let counts = Self::count_parallel(&lines, n)?;
		info!(
			"trained on {} words from {} word list(s): {} distinct {}-grams",
			counts.word_count(),
			sources.len(),
			counts.len(),
			counts.ngram_width()
		);

		Ok(Self::from_counts(counts))
	}

	/// Trains from the word lists and settings of a [`Config`].
	pub fn from_config(config: &Config) -> Result<Self> {
		config.validate()?;
		let corpus = Self::train(config.word_lists.as_slice(), config.ngram_width)?;
		Ok(corpus.with_reference_word(&config.reference_word))
	}

	/// Trains a single-character model from in-memory words.
	pub fn from_words<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut counts = TransitionCounts::default();
		for word in words {
			counts.add_word(word.as_ref());
		}
		Self::from_counts(counts)
	}

	/// Wraps already merged counts.
	pub fn from_counts(counts: TransitionCounts) -> Self {
		Self {
			table: counts.finalize(),
			reference_word: DEFAULT_REFERENCE_WORD.to_owned(),
		}
	}

	/// Replaces the word used by [`Corpus::relative_to_reference`].
	pub fn with_reference_word(mut self, reference_word: &str) -> Self {
		self.reference_word = reference_word.to_owned();
		self
	}

	/// Counts `lines` on a pool of threads and merges the partial results.
	///
	/// Merging is commutative and associative over counts, so the arrival
	/// order of the partial models does not change the result.
	fn count_parallel(lines: &[String], n: usize) -> Result<TransitionCounts> {
		let mut final_counts = TransitionCounts::new(n)?;
		if lines.is_empty() {
			return Ok(final_counts);
		}

		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = lines.len().div_ceil(chunks).max(1);

		thread::scope(|scope| -> Result<TransitionCounts> {
			let (tx, rx) = mpsc::channel();
			for chunk in lines.chunks(chunk_size) {
				let tx = tx.clone();
				scope.spawn(move || {
					let partial = TransitionCounts::new(n).map(|mut partial| {
						for word in chunk {
							partial.add_word(word);
						}
						partial
					});
					// The receiver outlives every worker of this scope
					let _ = tx.send(partial);
				});
			}
			drop(tx);

			for partial in rx.iter() {
				final_counts.merge(&partial?)?;
			}
			Ok(final_counts)
		})
	}

	/// The frozen transition table.
	pub fn table(&self) -> &TransitionTable {
		&self.table
	}

	/// Word used as the baseline of [`Corpus::relative_to_reference`].
	pub fn reference_word(&self) -> &str {
		&self.reference_word
	}

	/// Length-normalized log-probability of `word`. See [`scorer::score`].
	pub fn score(&self, word: &str) -> Result<f64> {
		scorer::score(word, &self.table)
	}

	/// `score(word) - score(other_word)`.
	pub fn relative_score(&self, word: &str, other_word: &str) -> Result<f64> {
		Ok(self.score(word)? - self.score(other_word)?)
	}

	/// Relative score of `word` against the reference word.
	pub fn relative_to_reference(&self, word: &str) -> Result<f64> {
		self.relative_score(word, &self.reference_word)
	}

	/// Whether `word` scores strictly higher than `other_word`.
	pub fn is_more_pronounceable(&self, word: &str, other_word: &str) -> Result<bool> {
		Ok(self.relative_score(word, other_word)? > 0.0)
	}
}
