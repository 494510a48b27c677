use log::debug;

use super::tokenizer::ngrams_of;
use super::transition_table::TransitionTable;
use crate::error::{PronError, Result};

/// Length-normalized log-probability of `word` under `table`.
///
/// The word is split with the table's n-gram width, then:
/// - `default = 1 / table.len()`
/// - `p` starts at `default` if the first n-gram is a table key, else 0
/// - `q` starts at `default`
/// - for each adjacent pair `(prev, cur)` whose `prev` is a table key,
///   `p += table[prev][cur]` (0 when absent) and `q += 1 / |table[prev]|`
/// - the result is `p / q`
///
/// Pairs whose `prev` is unknown are skipped entirely: they neither lower
/// nor lengthen the score. Known `prev` with unknown `cur` adds 0 to `p`.
/// Note that the lookup reads `table[prev][cur]` although the table is
/// keyed current-then-context; downstream comparisons rely on this exact
/// formula, so it is kept as is.
///
/// # Errors
/// Returns `EmptyModel` if the word has n-grams but the table has no key.
/// A word without any n-gram scores `0.0`, even on an empty table.
pub fn score(word: &str, table: &TransitionTable) -> Result<f64> {
	let ngrams = ngrams_of(word, table.ngram_width());
	if ngrams.is_empty() {
		return Ok(0.0);
	}
	if table.is_empty() {
		return Err(PronError::EmptyModel);
	}

	let default_value = 1.0 / table.len() as f64;
	let mut p = if table.contains(&ngrams[0]) { default_value } else { 0.0 };
	let mut q = default_value;

	for pair in ngrams.windows(2) {
		let (prev, cur) = (&pair[0], &pair[1]);
		// Unseen contexts are invisible rather than penalized.
		let Some(bucket) = table.get(prev) else {
			continue;
		};
		p += bucket.get(cur).copied().unwrap_or(0.0);
		q += 1.0 / bucket.len() as f64;
	}

	debug!("score({word:?}): p={p}, q={q}");
	Ok(p / q)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::transition_counts::TransitionCounts;

	fn table_of(words: &[&str]) -> TransitionTable {
		let mut counts = TransitionCounts::new(1).unwrap();
		for word in words {
			counts.add_word(word);
		}
		counts.finalize()
	}

	#[test]
	fn empty_word_scores_zero() {
		let table = table_of(&["cats"]);
		assert_eq!(score("", &table).unwrap(), 0.0);
		assert_eq!(score("x", &table).unwrap(), 0.0);
	}

	#[test]
	fn empty_word_on_empty_table_is_still_zero() {
		let table = table_of(&[]);
		assert_eq!(score("  ", &table).unwrap(), 0.0);
	}

	#[test]
	fn empty_table_is_an_error() {
		let table = table_of(&["a", "b"]);
		assert!(matches!(score("cats", &table), Err(PronError::EmptyModel)));
	}

	#[test]
	fn follows_the_formula_by_hand() {
		// cats: [c,a,t] -> a<-c, t<-a ; bats: a<-b, t<-a ; acts: c<-a, t<-c
		// table: a:{c:ln 1/2, b:ln 1/2}, t:{a:ln 2/3, c:ln 1/3}, c:{a:0}
		let table = table_of(&["cats", "bats", "acts"]);
		let default_value = 1.0 / 3.0;

		// "tact" -> [t,a,c]: first "t" is a key.
		// (t,a): p += table[t][a] = ln 2/3, q += 1/2
		// (a,c): p += table[a][c] = ln 1/2, q += 1/2
		let p = default_value + (2.0f64 / 3.0).ln() + 0.5f64.ln();
		let q = default_value + 0.5 + 0.5;
		assert!((score("tact", &table).unwrap() - p / q).abs() < 1e-12);

		// "Tact " is normalized to the same word.
		assert_eq!(score("Tact ", &table).unwrap(), score("tact", &table).unwrap());
	}

	#[test]
	fn unknown_contexts_are_skipped() {
		let table = table_of(&["cats", "bats", "acts"]);
		// "xyz" -> [x,y]: "x" is no key, the single pair is skipped.
		let s = score("xyz", &table).unwrap();
		assert_eq!(s, 0.0);
		assert!(s.is_finite());
	}

	#[test]
	fn unknown_next_counts_as_zero() {
		let table = table_of(&["cats", "bats", "acts"]);
		// "cqz" -> [c,q]: "c" is a key, table[c][q] absent.
		// p = default + 0, q = default + 1/|table[c]| = default + 1
		let default_value = 1.0 / 3.0;
		let expected = default_value / (default_value + 1.0);
		assert!((score("cqz", &table).unwrap() - expected).abs() < 1e-12);
	}

	#[test]
	fn repeated_calls_are_bit_identical() {
		let table = table_of(&["strawberry", "straw", "berry", "beast"]);
		let first = score("raspberry", &table).unwrap();
		for _ in 0..10 {
			assert_eq!(score("raspberry", &table).unwrap().to_bits(), first.to_bits());
		}
	}
}
