use std::path::{Path, PathBuf};

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::sampler::WeightedSampler;
use crate::error::ShannonError;
use crate::io;

/// Lowercase Cyrillic letters followed by the ten digits (43 symbols).
pub const UNIFORM_SYMBOLS: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя0123456789";

/// Symbols of the skewed stream, most to least frequent.
pub const SKEWED_SYMBOLS: &str = "абвгдежзий";

/// Integer weights of [`SKEWED_SYMBOLS`].
///
/// The last symbol (`й`) carries a weight of 0 and never appears in a
/// generated stream. Kept as-is; tests assert it.
pub const SKEWED_WEIGHTS: [u32; 10] = [40, 20, 15, 10, 5, 3, 2, 1, 1, 0];

/// Default artifact names and sizes (in code points).
pub const UNIFORM_FILE: &str = "uniform.txt";
pub const UNIFORM_SIZE: usize = 15_000;
pub const SKEWED_FILE: &str = "non_uniform.txt";
pub const SKEWED_SIZE: usize = 12_000;

/// Distribution a synthetic artifact is drawn from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Distribution {
	/// Every symbol equally likely.
	Uniform { symbols: String },
	/// Symbol `i` drawn with probability `weights[i] / Σ weights`.
	Weighted { symbols: String, weights: Vec<u32> },
}

impl Distribution {
	/// The 43-symbol uniform alphabet.
	pub fn uniform() -> Self {
		Self::Uniform { symbols: UNIFORM_SYMBOLS.to_owned() }
	}

	/// The 10-symbol skewed alphabet.
	pub fn skewed() -> Self {
		Self::Weighted { symbols: SKEWED_SYMBOLS.to_owned(), weights: SKEWED_WEIGHTS.to_vec() }
	}

	/// Draws `size` code points from this distribution.
	///
	/// # Errors
	/// Returns `InvalidWeights` for an empty alphabet or unusable weights.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> Result<String, ShannonError> {
		match self {
			Self::Uniform { symbols } => {
				let symbols: Vec<char> = symbols.chars().collect();
				generate_uniform(rng, &symbols, size)
			}
			Self::Weighted { symbols, weights } => {
				let symbols: Vec<char> = symbols.chars().collect();
				let sampler = WeightedSampler::new(&symbols, weights)?;
				Ok(generate_weighted(rng, &sampler, size))
			}
		}
	}
}

/// One synthetic artifact to produce.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SyntheticSpec {
	/// Output path.
	pub path: PathBuf,
	/// Number of code points (not bytes) to write.
	pub size: usize,
	#[serde(flatten)]
	pub distribution: Distribution,
}

impl SyntheticSpec {
	/// `uniform.txt`, 15000 symbols from the uniform alphabet.
	pub fn uniform() -> Self {
		Self { path: PathBuf::from(UNIFORM_FILE), size: UNIFORM_SIZE, distribution: Distribution::uniform() }
	}

	/// `non_uniform.txt`, 12000 symbols from the skewed alphabet.
	pub fn skewed() -> Self {
		Self { path: PathBuf::from(SKEWED_FILE), size: SKEWED_SIZE, distribution: Distribution::skewed() }
	}
}

/// Draws `size` symbols independently and uniformly from `symbols`.
///
/// # Errors
/// Returns `InvalidWeights` if `symbols` is empty.
pub fn generate_uniform<R: Rng + ?Sized>(rng: &mut R, symbols: &[char], size: usize) -> Result<String, ShannonError> {
	if symbols.is_empty() {
		return Err(ShannonError::InvalidWeights("empty alphabet".to_owned()));
	}

	Ok((0..size).map(|_| symbols[rng.random_range(0..symbols.len())]).collect())
}

/// Draws `size` symbols independently from a weighted sampler.
pub fn generate_weighted<R: Rng + ?Sized>(rng: &mut R, sampler: &WeightedSampler, size: usize) -> String {
	(0..size).map(|_| sampler.sample(rng)).collect()
}

/// Writes generated text to `path` as UTF-8.
///
/// The file is replaced atomically: if writing fails, whatever was at
/// `path` before is left untouched and no partial output is visible.
pub fn write_artifact<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), ShannonError> {
	io::write_atomic(path, contents.as_bytes())
}

/// Generates and writes one synthetic artifact.
pub fn generate_file<R: Rng + ?Sized>(rng: &mut R, spec: &SyntheticSpec) -> Result<(), ShannonError> {
	let contents = spec.distribution.generate(rng, spec.size)?;
	write_artifact(&spec.path, &contents)?;
	info!("Wrote {} symbols ({} bytes) to {}", spec.size, contents.len(), spec.path.display());
	Ok(())
}
