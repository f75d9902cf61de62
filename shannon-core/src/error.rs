use std::path::PathBuf;

use thiserror::Error;

/// Every failure the library can report.
///
/// Degenerate entropy inputs (empty sequences, sequences shorter than the
/// n-gram order, windows removed by tab filtering) are not errors: they
/// produce an entropy of `0.0`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ShannonError {
	#[error("I/O error on '{path}': {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("'{path}' is not valid UTF-8 (first invalid byte at offset {offset})")]
	Decode { path: PathBuf, offset: usize },

	#[error("unsupported n-gram order {0}, expected 1 or 2")]
	UnsupportedOrder(usize),

	#[error("n-gram order mismatch: {0} vs {1}")]
	OrderMismatch(usize, usize),

	#[error("invalid weights: {0}")]
	InvalidWeights(String),

	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	#[error("failed to persist '{path}': {source}")]
	Persist {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

impl ShannonError {
	pub(crate) fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}
