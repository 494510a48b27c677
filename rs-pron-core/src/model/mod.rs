//! Top-level module for the pronounceability model.
//!
//! Words are treated as first-order Markov chains over n-grams (single
//! characters by default). This module provides:
//! - Word normalization and n-gram decomposition (`tokenizer`)
//! - Per-n-gram context counting (`ContextBucket`)
//! - The training accumulator (`TransitionCounts`)
//! - The frozen log-probability table (`TransitionTable`)
//! - The length-normalized scoring function (`scorer`)
//! - A high-level trained model with comparison helpers (`Corpus`)

/// Trained model: training from word lists, scoring and comparison.
pub mod corpus;

/// Context counts for a single current n-gram.
///
/// Supports merging for parallel training and log-probability conversion.
pub mod context_bucket;

/// Length-normalized log-probability of a word under a transition table.
pub mod scorer;

/// Normalization and n-gram splitting of words.
pub mod tokenizer;

/// Mutable transition counts built while reading word lists.
pub mod transition_counts;

/// Immutable log-probability table shared by all scorers.
pub mod transition_table;
