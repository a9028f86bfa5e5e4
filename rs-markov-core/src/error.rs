//! Error types for the rs-markov-core crate.
//!
//! Building and walking a chain never fails; only loading the corpus can.

use std::path::PathBuf;

/// Error returned when the corpus cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
	/// Returned when the corpus file cannot be opened.
	#[error("cannot open corpus file {}: {source}", path.display())]
	Open {
		/// Path of the corpus file.
		path: PathBuf,
		/// Underlying I/O error.
		source: std::io::Error,
	},

	/// Returned when reading the corpus fails midway.
	#[error("cannot read corpus: {source}")]
	Read {
		/// Underlying I/O error.
		source: std::io::Error,
	},
}
