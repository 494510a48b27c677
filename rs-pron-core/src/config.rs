//! Training and comparison settings.
//!
//! Every field has a fixed default matching the classic behavior (one system
//! word list, single characters, `"english"` as reference) and can be
//! overridden from the environment:
//!
//! | Variable              | Field            | Format                         |
//! |-----------------------|------------------|--------------------------------|
//! | `RS_PRON_WORDLISTS`   | `word_lists`     | paths joined like `PATH`       |
//! | `RS_PRON_NGRAM_WIDTH` | `ngram_width`    | integer >= 1                   |
//! | `RS_PRON_REFERENCE`   | `reference_word` | any string                     |

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PronError, Result};
use crate::model::tokenizer::DEFAULT_NGRAM_WIDTH;

pub const DEFAULT_WORD_LIST: &str = "/usr/share/dict/american-english";
pub const DEFAULT_REFERENCE_WORD: &str = "english";

pub const ENV_WORD_LISTS: &str = "RS_PRON_WORDLISTS";
pub const ENV_NGRAM_WIDTH: &str = "RS_PRON_NGRAM_WIDTH";
pub const ENV_REFERENCE: &str = "RS_PRON_REFERENCE";

/// Where to train from and what to compare against.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
	/// Line-delimited word lists used for training.
	pub word_lists: Vec<PathBuf>,

	/// Width of the n-grams (1 = characters).
	pub ngram_width: usize,

	/// Word scored as the baseline when no other word is given.
	pub reference_word: String,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			word_lists: vec![PathBuf::from(DEFAULT_WORD_LIST)],
			ngram_width: DEFAULT_NGRAM_WIDTH,
			reference_word: DEFAULT_REFERENCE_WORD.to_owned(),
		}
	}
}

impl Config {
	/// Default configuration overlaid with the `RS_PRON_*` variables.
	///
	/// The result is not validated, so callers can still override fields
	/// before calling [`Config::validate`].
	///
	/// # Errors
	/// Returns `InvalidConfig` if a variable cannot be parsed.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|key| env::var(key).ok())
	}

	/// Same as [`Config::from_env`] with an arbitrary variable source.
	pub fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = Self::default();

		if let Some(paths) = lookup(ENV_WORD_LISTS) {
			config.word_lists = env::split_paths(&paths)
				.filter(|p| !p.as_os_str().is_empty())
				.collect();
		}

		if let Some(width) = lookup(ENV_NGRAM_WIDTH) {
			config.ngram_width = width.trim().parse().map_err(|_| {
				PronError::invalid_config(format!("{ENV_NGRAM_WIDTH} must be an integer, got '{width}'"))
			})?;
		}

		if let Some(reference) = lookup(ENV_REFERENCE) {
			config.reference_word = reference;
		}

		Ok(config)
	}

	/// Checks the values that training cannot work with.
	pub fn validate(&self) -> Result<()> {
		if self.ngram_width == 0 {
			return Err(PronError::InvalidNgramWidth(self.ngram_width));
		}
		if self.word_lists.is_empty() {
			return Err(PronError::invalid_config("at least one word list is required"));
		}
		Ok(())
	}
}
