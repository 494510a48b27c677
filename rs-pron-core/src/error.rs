//! Error types for training and scoring.
//!
//! All fallible operations of the crate return [`Result`], whose error side is
//! the [`PronError`] enum.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or querying a pronounceability model.
#[derive(Error, Debug)]
pub enum PronError {
	/// A word list could not be opened or read. Training is aborted.
	#[error("word list unavailable: {}: {source}", path.display())]
	SourceUnavailable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// Scoring was attempted against a table without any entry.
	#[error("the transition table is empty, train on at least one word of two or more characters")]
	EmptyModel,

	/// The n-gram width must be at least 1.
	#[error("invalid n-gram width: {0}, must be >= 1")]
	InvalidNgramWidth(usize),

	/// Two partial count tables of different widths were merged.
	#[error("n-gram width mismatch: expected {expected}, found {found}")]
	WidthMismatch { expected: usize, found: usize },

	/// Two context buckets for different current n-grams were merged.
	#[error("bucket key mismatch: '{expected}' vs '{found}'")]
	KeyMismatch { expected: String, found: String },

	/// Writing the result failed.
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),

	/// A configuration value could not be interpreted.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
}

/// Result type alias for operations that may fail with [`PronError`].
pub type Result<T> = std::result::Result<T, PronError>;

impl PronError {
	/// Wraps an I/O failure on `path` into [`PronError::SourceUnavailable`].
	pub fn source_unavailable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
		PronError::SourceUnavailable { path: path.into(), source }
	}

	/// Create a new configuration error.
	pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
		PronError::InvalidConfig(msg.into())
	}
}
