use crate::error::CorpusError;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Reads the whole corpus from `path`, or from standard input when `path` is `None`.
///
/// - Reads until end of stream, no line splitting
/// - Invalid UTF-8 sequences are replaced with U+FFFD
pub fn read_corpus<P: AsRef<Path>>(path: Option<P>) -> Result<String, CorpusError> {
	match path {
		Some(path) => {
			let path = path.as_ref();
			let file = File::open(path).map_err(|source| CorpusError::Open {
				path: path.to_path_buf(),
				source,
			})?;
			debug!(path = %path.display(), "reading corpus from file");
			read_from(file)
		}
		None => {
			debug!("reading corpus from standard input");
			read_from(io::stdin().lock())
		}
	}
}

/// Reads `reader` to the end and decodes it as UTF-8 (lossy).
pub fn read_from<R: Read>(mut reader: R) -> Result<String, CorpusError> {
	let mut bytes = Vec::new();
	reader
		.read_to_end(&mut bytes)
		.map_err(|source| CorpusError::Read { source })?;
	debug!(bytes = bytes.len(), "corpus read");
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn read_from_keeps_everything() {
		let text = read_from(Cursor::new("line one\nline two\r\n\n")).unwrap();
		assert_eq!(text, "line one\nline two\r\n\n");
	}

	#[test]
	fn read_from_replaces_invalid_utf8() {
		let text = read_from(Cursor::new(vec![b'a', 0xff, b'b'])).unwrap();
		assert_eq!(text, "a\u{fffd}b");
	}

	#[test]
	fn read_corpus_missing_file() {
		let err = read_corpus(Some("this/file/does/not/exist.txt")).unwrap_err();
		assert!(matches!(err, CorpusError::Open { .. }));
	}

	#[test]
	fn read_corpus_from_file() {
		let path = std::env::temp_dir().join(format!("rs-markov-io-{}.txt", std::process::id()));
		std::fs::write(&path, "héllo").unwrap();
		let text = read_corpus(Some(&path));
		std::fs::remove_file(&path).unwrap();
		assert_eq!(text.unwrap(), "héllo");
	}
}
