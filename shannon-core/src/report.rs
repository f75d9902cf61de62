use std::fmt;
use std::path::Path;

use log::{debug, warn};
use serde::Serialize;

use crate::error::ShannonError;
use crate::io;
use crate::model::{calculate_entropy, entropy_ratio};

/// Artifacts below this many bytes get an advisory, analysis still runs.
pub const SMALL_FILE_THRESHOLD: u64 = 10 * 1024;

/// Width of the separator printed after each report.
const SEPARATOR_WIDTH: usize = 40;

/// Outcome of analyzing one artifact.
///
/// `Display` renders the console report:
/// a header naming the artifact, the size in whole KB, both entropies and
/// their ratio with 4 decimals, and a separator line.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Analysis {
	/// Artifact name as given by the caller.
	pub name: String,
	/// Raw size in bytes.
	pub byte_size: u64,
	/// Number of decoded code points.
	pub symbols: usize,
	pub text_mode: bool,
	/// Bits per symbol over 1-grams.
	pub entropy_1: f64,
	/// Bits per symbol position over 2-grams.
	pub entropy_2: f64,
	/// `entropy_2 / entropy_1`, 0 when `entropy_1` is 0.
	pub ratio: f64,
	/// `true` below [`SMALL_FILE_THRESHOLD`].
	pub undersized: bool,
}

impl Analysis {
	/// Size in KB, rounded down.
	pub fn size_kb(&self) -> u64 {
		self.byte_size / 1024
	}
}

impl fmt::Display for Analysis {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Analysis of file: {}", self.name)?;
		writeln!(f, "Size: {} KB", self.size_kb())?;
		writeln!(f, "Entropy (1-grams): {:.4} bits/symbol", self.entropy_1)?;
		writeln!(f, "Entropy (2-grams): {:.4} bits/symbol", self.entropy_2)?;
		writeln!(f, "Ratio (2/1): {:.4}", self.ratio)?;
		write!(f, "{}", "-".repeat(SEPARATOR_WIDTH))
	}
}

/// Analyzes an already decoded sequence.
///
/// Pure: no I/O and no logging of the undersized advisory.
pub fn analyze_symbols(name: &str, symbols: &[char], byte_size: u64, text_mode: bool) -> Analysis {
	let entropy_1 = calculate_entropy(symbols, 1, text_mode);
	let entropy_2 = calculate_entropy(symbols, 2, text_mode);

	Analysis {
		name: name.to_owned(),
		byte_size,
		symbols: symbols.len(),
		text_mode,
		entropy_1,
		entropy_2,
		ratio: entropy_ratio(entropy_1, entropy_2),
		undersized: byte_size < SMALL_FILE_THRESHOLD,
	}
}

/// Analyzes in-memory text, its UTF-8 length standing in for the file size.
pub fn analyze_text(name: &str, text: &str, text_mode: bool) -> Analysis {
	let symbols: Vec<char> = text.chars().collect();
	analyze_symbols(name, &symbols, text.len() as u64, text_mode)
}

/// Reads, decodes and analyzes one artifact.
///
/// # Behavior
/// - Reads the whole file into memory and measures its raw byte size
/// - Decodes it as UTF-8
/// - Logs an advisory below 10 KiB, then carries on
/// - Computes entropy for 1-grams and 2-grams
///
/// # Errors
/// - `Io` if the file cannot be opened or read
/// - `Decode` if the content is not valid UTF-8
pub fn analyze_file<P: AsRef<Path>>(path: P, text_mode: bool) -> Result<Analysis, ShannonError> {
	let path = path.as_ref();
	let bytes = io::read_bytes(path)?;
	let byte_size = bytes.len() as u64;

	if byte_size < SMALL_FILE_THRESHOLD {
		warn!("{} is smaller than 10 KB ({} bytes), analysis continues", path.display(), byte_size);
	}

	let symbols = io::decode_utf8(path, &bytes)?;
	debug!("{}: {} bytes, {} code points", path.display(), byte_size, symbols.len());

	Ok(analyze_symbols(&path.display().to_string(), &symbols, byte_size, text_mode))
}
