use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::normalizer::normalize;
use crate::error::ShannonError;

/// Code point dropped from every window before it is counted.
pub const TAB: char = '\t';

/// Smallest and largest n-gram orders a table accepts.
pub const MIN_ORDER: usize = 1;
pub const MAX_ORDER: usize = 2;

/// Frequency table of character n-grams.
///
/// A window of `n` raw code points is normalized, stripped of tabs, and
/// counted only if exactly `n` code points remain. Shorter windows are
/// discarded, never padded.
///
/// # Responsibilities
/// - Slide a window over a symbol sequence and count surviving n-grams
/// - Track the total number of counted windows
/// - Compute the empirical Shannon entropy of the counted distribution
/// - Merge with another table of the same order
///
/// # Invariants
/// - `n` is 1 or 2
/// - Every key holds exactly `n` code points
/// - Every count is >= 1 and `total` is the sum of all counts
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NGramTable {
	/// Order of the table (number of code points per n-gram)
	n: usize,

	/// Occurrences per n-gram key.
	/// Example: { "ан" => 42, "на" => 3 }
	frequencies: HashMap<String, usize>,

	/// Number of windows that were counted
	total: usize,
}

impl NGramTable {
	/// Creates an empty table of order `n`.
	///
	/// # Errors
	/// Returns `UnsupportedOrder` unless `n` is 1 or 2.
	pub fn new(n: usize) -> Result<Self, ShannonError> {
		if !(MIN_ORDER..=MAX_ORDER).contains(&n) {
			return Err(ShannonError::UnsupportedOrder(n));
		}
		Ok(Self::with_order(n))
	}

	/// Unchecked constructor, the estimator accepts any positive order.
	pub(crate) fn with_order(n: usize) -> Self {
		Self { n, frequencies: HashMap::new(), total: 0 }
	}

	/// Builds a table from a whole symbol sequence.
	///
	/// # Errors
	/// Returns `UnsupportedOrder` unless `n` is 1 or 2.
	pub fn from_symbols(symbols: &[char], n: usize, text_mode: bool) -> Result<Self, ShannonError> {
		let mut table = Self::new(n)?;
		table.add_symbols(symbols, text_mode);
		Ok(table)
	}

	/// Counts every window of the sequence.
	///
	/// There are `len - n + 1` windows when `len >= n` and none otherwise.
	pub fn add_symbols(&mut self, symbols: &[char], text_mode: bool) {
		if self.n == 0 || symbols.len() < self.n {
			// Sequence too short, no n-grams to count
			return;
		}

		for window in symbols.windows(self.n) {
			self.add_window(window, text_mode);
		}
	}

	/// Counts a single window of raw code points.
	///
	/// Returns `false` if the window lost a code point to tab filtering and
	/// was discarded.
	pub fn add_window(&mut self, window: &[char], text_mode: bool) -> bool {
		let key: String = window
			.iter()
			.map(|c| normalize(*c, text_mode))
			.filter(|c| *c != TAB)
			.collect();

		if key.chars().count() != self.n {
			return false;
		}

		*self.frequencies.entry(key).or_insert(0) += 1;
		self.total += 1;
		true
	}

	/// Order of the table.
	pub fn order(&self) -> usize {
		self.n
	}

	/// Number of counted windows.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Number of distinct n-grams.
	pub fn distinct(&self) -> usize {
		self.frequencies.len()
	}

	/// Occurrences of `key`, 0 if it was never counted.
	pub fn count(&self, key: &str) -> usize {
		self.frequencies.get(key).copied().unwrap_or(0)
	}

	/// Shannon entropy `-Σ p·log2(p)` of the counted n-grams.
	///
	/// Divided by `n` for orders above 1, giving bits per symbol position so
	/// that orders can be compared. An empty table has entropy `0.0`.
	pub fn entropy(&self) -> f64 {
		if self.total == 0 {
			return 0.0;
		}

		let total = self.total as f64;
		let entropy: f64 = self
			.frequencies
			.values()
			.map(|&count| {
				let p = count as f64 / total;
				-p * p.log2()
			})
			.sum();

		// A single key sums to -0.0
		let entropy = if entropy > 0.0 { entropy } else { 0.0 };
		if self.n > 1 { entropy / self.n as f64 } else { entropy }
	}

	/// Merges another table into this one.
	///
	/// Counts of matching n-grams are summed.
	///
	/// # Errors
	/// Returns `OrderMismatch` if the orders differ.
	pub fn merge(&mut self, other: &Self) -> Result<(), ShannonError> {
		if self.n != other.n {
			return Err(ShannonError::OrderMismatch(self.n, other.n));
		}

		for (key, count) in &other.frequencies {
			*self.frequencies.entry(key.clone()).or_insert(0) += *count;
		}
		self.total += other.total;

		Ok(())
	}
}
