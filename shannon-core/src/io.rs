use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::ShannonError;

/// Reads a whole file into memory.
///
/// The handle is scoped to this call and released on every path,
/// including the error one.
pub(crate) fn read_bytes<P: AsRef<Path>>(filename: P) -> Result<Vec<u8>, ShannonError> {
	let filename = filename.as_ref();
	fs::read(filename).map_err(|e| ShannonError::io(filename, e))
}

/// Decodes a byte buffer as UTF-8 into a sequence of code points.
pub(crate) fn decode_utf8<P: AsRef<Path>>(filename: P, bytes: &[u8]) -> Result<Vec<char>, ShannonError> {
	match std::str::from_utf8(bytes) {
		Ok(text) => Ok(text.chars().collect()),
		Err(e) => Err(ShannonError::Decode {
			path: filename.as_ref().to_path_buf(),
			offset: e.valid_up_to(),
		}),
	}
}

/// Parent directory of a file path, `"."` for bare file names.
///
/// Example:
/// `data/input.txt` → `data`, `input.txt` → `.`
pub(crate) fn parent_folder<P: AsRef<Path>>(filepath: P) -> PathBuf {
	match filepath.as_ref().parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
		_ => PathBuf::from("."),
	}
}

/// Writes `contents` to `filename` atomically.
///
/// - Writes into a temporary file in the destination directory
/// - Renames it over `filename` only once every byte is flushed
///
/// On failure the temporary file is removed and `filename` is left as it was.
pub(crate) fn write_atomic<P: AsRef<Path>>(filename: P, contents: &[u8]) -> Result<(), ShannonError> {
	let filename = filename.as_ref();
	let folder = parent_folder(filename);

	let mut tmp = NamedTempFile::new_in(&folder).map_err(|e| ShannonError::io(&folder, e))?;
	tmp.write_all(contents).map_err(|e| ShannonError::io(tmp.path(), e))?;
	tmp.as_file().sync_all().map_err(|e| ShannonError::io(tmp.path(), e))?;
	tmp.persist(filename).map_err(|e| ShannonError::Persist {
		path: filename.to_path_buf(),
		source: e.error,
	})?;

	Ok(())
}
