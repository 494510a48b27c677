//! Word normalization and n-gram decomposition.

/// Default n-gram width: single characters are the atomic context unit.
pub const DEFAULT_NGRAM_WIDTH: usize = 1;

/// Trims surrounding whitespace and lowercases a raw word.
pub fn normalize_word(raw: &str) -> String {
	raw.trim().to_lowercase()
}

/// Splits a word into its ordered sequence of `n`-character windows.
///
/// The word is normalized first. For a word of `L` characters the result
/// holds `L - n` windows starting at positions `0..L-n`, so the trailing
/// window is never produced on its own. Words of `n` characters or fewer
/// yield an empty sequence.
///
/// # Notes
/// - UTF-8 safe: windows are counted in characters, not bytes.
/// - `n == 0` yields an empty sequence.
pub fn ngrams_of(word: &str, n: usize) -> Vec<String> {
	if n == 0 {
		return Vec::new();
	}
	let chars: Vec<char> = normalize_word(word).chars().collect();
	if chars.len() <= n {
		return Vec::new();
	}
	(0..chars.len() - n)
		.map(|i| chars[i..i + n].iter().collect())
		.collect()
}

/// Splits a word into single characters, leaving out the last one.
///
/// `"cats"` gives `["c", "a", "t"]`; empty and one-character words give `[]`.
pub fn characters_of(word: &str) -> Vec<String> {
	ngrams_of(word, DEFAULT_NGRAM_WIDTH)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn normalize_trims_and_lowercases() {
		assert_eq!(normalize_word("  Strawberry\t\n"), "strawberry");
		assert_eq!(normalize_word(""), "");
	}

	#[test]
	fn characters_drop_the_last_one() {
		assert_eq!(characters_of("cats"), vec!["c", "a", "t"]);
		assert_eq!(characters_of(" CaT "), vec!["c", "a"]);
	}

	#[test]
	fn short_words_yield_nothing() {
		assert!(characters_of("").is_empty());
		assert!(characters_of("a").is_empty());
		assert!(characters_of("   ").is_empty());
		assert_eq!(characters_of("ab"), vec!["a"]);
	}

	#[test]
	fn multibyte_characters_are_kept_whole() {
		assert_eq!(characters_of("Éclair"), vec!["é", "c", "l", "a", "i"]);
	}

	#[test]
	fn wider_windows() {
		assert_eq!(ngrams_of("banana", 2), vec!["ba", "an", "na", "an"]);
		assert_eq!(ngrams_of("abc", 3), Vec::<String>::new());
		assert!(ngrams_of("banana", 0).is_empty());
	}
}
