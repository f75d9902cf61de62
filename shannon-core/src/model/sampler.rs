use rand::Rng;

use crate::error::ShannonError;

/// Weighted random selection over a fixed list of symbols.
///
/// The probability of selecting a symbol is proportional to its integer
/// weight. Symbols with a zero weight stay in the table but are never drawn.
///
/// ## Invariants
/// - `symbols` and `weights` have the same, non-zero length
/// - `total` is the sum of `weights` and is strictly positive
#[derive(Clone, Debug)]
pub struct WeightedSampler {
	symbols: Vec<char>,
	weights: Vec<u32>,
	total: u64,
}

impl WeightedSampler {
	/// Creates a sampler from parallel symbol and weight lists.
	///
	/// # Errors
	/// Returns `InvalidWeights` if the lists differ in length, are empty,
	/// or every weight is zero.
	pub fn new(symbols: &[char], weights: &[u32]) -> Result<Self, ShannonError> {
		if symbols.len() != weights.len() {
			return Err(ShannonError::InvalidWeights(format!(
				"{} symbols but {} weights",
				symbols.len(),
				weights.len()
			)));
		}
		if symbols.is_empty() {
			return Err(ShannonError::InvalidWeights("empty table".to_owned()));
		}

		let total: u64 = weights.iter().map(|w| u64::from(*w)).sum();
		if total == 0 {
			return Err(ShannonError::InvalidWeights("all weights are zero".to_owned()));
		}

		Ok(Self { symbols: symbols.to_vec(), weights: weights.to_vec(), total })
	}

	/// Draws one symbol.
	///
	/// This method performs:
	/// - an O(n) scan over the weights
	/// - a cumulative subtraction to select a bucket
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
		let mut r = rng.random_range(0..self.total);

		for (symbol, weight) in self.symbols.iter().zip(&self.weights) {
			let weight = u64::from(*weight);
			if r < weight {
				return *symbol;
			}
			r -= weight;
		}

		// Unreachable while r < total, fall back on the last drawable symbol
		self.symbols
			.iter()
			.zip(&self.weights)
			.rev()
			.find(|(_, w)| **w > 0)
			.map_or(self.symbols[0], |(s, _)| *s)
	}

	/// Probability of drawing `symbol`, 0 if absent.
	pub fn probability(&self, symbol: char) -> f64 {
		let weight: u64 = self
			.symbols
			.iter()
			.zip(&self.weights)
			.filter(|(s, _)| **s == symbol)
			.map(|(_, w)| u64::from(*w))
			.sum();
		weight as f64 / self.total as f64
	}
}
