use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{PronError, Result};

/// Reads a word list and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Any open or read failure becomes `SourceUnavailable` for that path
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|e| PronError::source_unavailable(path, e))?;
	Ok(contents.lines().map(str::to_owned).collect())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn reads_every_line() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "cat\r\ndog\n\nbird").unwrap();
		let lines = read_file(file.path()).unwrap();
		assert_eq!(lines, vec!["cat", "dog", "", "bird"]);
	}

	#[test]
	fn missing_file_is_source_unavailable() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("missing.txt");
		match read_file(&missing) {
			Err(PronError::SourceUnavailable { path, .. }) => assert_eq!(path, missing),
			other => panic!("unexpected result: {other:?}"),
		}
	}
}
