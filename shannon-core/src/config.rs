use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ShannonError;
use crate::io;
use crate::model::generator::SyntheticSpec;

/// Natural-language reference file analyzed by the default plan.
pub const LITERATURE_FILE: &str = "literature.txt";

/// One artifact to analyze.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Target {
	pub path: PathBuf,
	/// Normalize code points before counting (natural-language input).
	#[serde(default)]
	pub text_mode: bool,
}

impl Target {
	pub fn new<P: Into<PathBuf>>(path: P, text_mode: bool) -> Self {
		Self { path: path.into(), text_mode }
	}
}

/// Description of a run: which artifacts to generate, then which to analyze.
///
/// `Plan::default()` generates `uniform.txt` and `non_uniform.txt`, then
/// analyzes both as raw streams and `literature.txt` in text mode.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Plan {
	/// Seed for the random source; `None` draws one from the OS.
	pub seed: Option<u64>,
	pub generate: Vec<SyntheticSpec>,
	pub analyze: Vec<Target>,
}

impl Default for Plan {
	fn default() -> Self {
		let uniform = SyntheticSpec::uniform();
		let skewed = SyntheticSpec::skewed();
		let analyze = vec![
			Target::new(uniform.path.clone(), false),
			Target::new(skewed.path.clone(), false),
			Target::new(LITERATURE_FILE, true),
		];

		Self { seed: None, generate: vec![uniform, skewed], analyze }
	}
}

impl Plan {
	/// Parses a plan from JSON.
	///
	/// # Errors
	/// Returns `InvalidConfig` on malformed JSON or a plan that can never
	/// produce output (a zero-size generator).
	pub fn from_json(json: &str) -> Result<Self, ShannonError> {
		let plan: Self = serde_json::from_str(json).map_err(|e| ShannonError::InvalidConfig(e.to_string()))?;
		plan.validate()?;
		Ok(plan)
	}

	/// Loads a plan from a JSON file.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ShannonError> {
		let bytes = io::read_bytes(&path)?;
		let json = String::from_utf8(bytes).map_err(|e| ShannonError::Decode {
			path: path.as_ref().to_path_buf(),
			offset: e.utf8_error().valid_up_to(),
		})?;
		Self::from_json(&json)
	}

	/// Loads a plan from `path` if it exists, the default plan otherwise.
	pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ShannonError> {
		let path = path.as_ref();
		if path.exists() {
			debug!("Loading plan from {}", path.display());
			Self::load(path)
		} else {
			debug!("No plan at {}, using the default one", path.display());
			Ok(Self::default())
		}
	}

	fn validate(&self) -> Result<(), ShannonError> {
		if let Some(spec) = self.generate.iter().find(|spec| spec.size == 0) {
			return Err(ShannonError::InvalidConfig(format!("{} has a size of 0", spec.path.display())));
		}
		Ok(())
	}
}
