//! Word pronounceability estimation.
//!
//! This crate scores how "pronounceable" a string is by modeling words as
//! first-order Markov chains over characters:
//! - Training from line-delimited word lists (in parallel)
//! - Log-probability transition tables
//! - Length-normalized scores and relative comparisons
//!
//! The trained [`Corpus`](model::corpus::Corpus) is an immutable value: build
//! it once, then score from as many places as needed.

/// Training and scoring.
pub mod model;

/// Settings: word lists, n-gram width, reference word.
pub mod config;

/// Error type and `Result` alias.
pub mod error;

/// I/O utilities (word list loading).
///
/// Not exposed
pub(crate) mod io;

pub use config::Config;
pub use error::{PronError, Result};
pub use model::corpus::Corpus;
