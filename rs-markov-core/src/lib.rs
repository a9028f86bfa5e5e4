//! Character-level Markov chain text generation library.
//!
//! This crate provides:
//! - Transition tables of any order built from a text corpus
//! - Reproducible or time-seeded text generation from such a table
//! - Corpus loading from a file or standard input
//!
//! ```
//! use rs_markov_core::{Seed, build, generate};
//!
//! let chain = build("ababab", 1);
//! let text = generate(&chain, 4, Seed::Fixed(7), "");
//! assert!(text == "abab" || text == "baba");
//! ```

/// Markov chain model and generation logic.
pub mod model;

/// Corpus loading (file or standard input).
pub mod io;

/// Error types of the I/O boundary.
pub mod error;

pub use error::CorpusError;
pub use model::chain::{Chain, ChainSummary};
pub use model::generation_input::{DEFAULT_LENGTH, GenerationInput, Seed};
pub use model::generator::Generator;
pub use model::state::State;

/// Builds the transition table of order `order` from `corpus`.
///
/// See [`Chain::build`].
pub fn build(corpus: &str, order: usize) -> Chain {
	Chain::build(corpus, order)
}

/// Generates `length` characters from `chain`, starting with `starter`.
///
/// See [`Generator::generate`].
pub fn generate(chain: &Chain, length: usize, seed: Seed, starter: &str) -> String {
	let input = GenerationInput::new(length)
		.with_seed(seed)
		.with_starter(starter);
	Generator::new(chain).generate(&input)
}
