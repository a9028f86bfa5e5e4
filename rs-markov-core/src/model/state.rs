use rand::Rng;
use rand::seq::IndexedRandom;

/// Represents a state in a character-level Markov chain.
///
/// A `State` corresponds to a fixed window of `order` characters (`key`) and
/// stores every character observed immediately after that window, in corpus
/// order.
///
/// Conceptually, this is a node in a Markov chain. Duplicated successors are
/// kept as-is, so sampling an entry uniformly reproduces the empirical
/// frequency of each transition.
///
/// ## Invariants
/// - Every successor was observed right after an occurrence of `key`
/// - States built from a corpus always hold at least one successor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
	/// Window of `order` characters identifying the state.
	key: String,
	/// Observed successors, duplicates retained.
	/// Example: "ab" in "abcabd" => ['c', 'd']
	successors: Vec<char>,
}

impl State {
	/// Creates a new state with no successor.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			successors: Vec::new(),
		}
	}

	/// Returns the window identifying this state.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Returns every recorded successor, in corpus order.
	pub fn successors(&self) -> &[char] {
		&self.successors
	}

	/// Records one more occurrence of `next_char` following this state.
	pub fn add_successor(&mut self, next_char: char) {
		self.successors.push(next_char);
	}

	/// Picks the next character uniformly among the recorded successors.
	///
	/// Returns `None` if the state has no successor.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
		self.successors.choose(rng).copied()
	}
}
