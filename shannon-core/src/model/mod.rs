//! Top-level module for the entropy estimation system.
//!
//! This module provides:
//! - Text-mode character normalization (`normalizer`)
//! - N-gram frequency tables (`NGramTable`)
//! - The entropy estimator (`calculate_entropy`)
//! - Integer-weighted random sampling (`WeightedSampler`)
//! - Synthetic character stream generation (`generator`)

/// Maps a raw code point to its canonical form under text mode.
pub mod normalizer;

/// Frequency table of n-grams built by sliding a window over a symbol sequence.
///
/// Handles windowing, tab dropping, merging and the entropy formula.
pub mod ngram_table;

/// Entry point computing the empirical entropy of a symbol sequence.
pub mod estimator;

/// Weighted random selection over a fixed table of integer weights.
pub mod sampler;

/// Uniform and skewed synthetic artifact producers.
pub mod generator;

pub use estimator::{calculate_entropy, entropy_ratio};
pub use ngram_table::NGramTable;
pub use normalizer::normalize;
