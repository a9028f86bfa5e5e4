use super::state::State;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Transition table of a character-level Markov chain of order `k`.
///
/// Each state is a window of `k` consecutive characters of the corpus, mapped
/// to every character observed right after it.
///
/// # Responsibilities
/// - Build the table from a corpus in a single left-to-right scan
/// - Look up the successors of a given window
/// - Pick a uniformly random state to (re)seed a generation walk
///
/// # Invariants
/// - `index[key]` is the position of the state whose key is `key`
/// - States are stored in first-seen order, so a seeded walk is reproducible
///   from one process to the next
/// - The table is never mutated once built
#[derive(Clone, Debug, Default)]
pub struct Chain {
	/// Window length (number of characters per state).
	order: usize,

	/// States in first-seen order.
	states: Vec<State>,

	/// Mapping from a window to its position in `states`.
	index: HashMap<String, usize>,
}

impl Chain {
	/// Builds the transition table of order `order` from `corpus`.
	///
	/// Never fails: when `order` is zero or the corpus holds no more than
	/// `order` characters, no window has a successor and the table is empty.
	///
	/// # Notes
	/// - Windows are counted in Unicode scalar values, not bytes.
	/// - No normalization: matching is exact and case-sensitive.
	/// - The last `order` characters only ever act as successors.
	pub fn build(corpus: &str, order: usize) -> Self {
		let mut chain = Self {
			order,
			..Self::default()
		};

		let chars: Vec<char> = corpus.chars().collect();
		if order == 0 || chars.len() <= order {
			debug!(order, corpus_chars = chars.len(), "corpus too short for order, chain is empty");
			return chain;
		}

		// Each window of order + 1 characters is one (state, successor) pair
		for window in chars.windows(order + 1) {
			let (prefix, next) = window.split_at(order);
			let key: String = prefix.iter().collect();
			chain.state_mut(key).add_successor(next[0]);
		}

		debug!(
			order,
			corpus_chars = chars.len(),
			states = chain.len(),
			transitions = chain.transition_count(),
			"chain built"
		);
		chain
	}

	/// Returns the state for `key`, creating it if absent.
	fn state_mut(&mut self, key: String) -> &mut State {
		let states = &mut self.states;
		let position = *self.index.entry(key).or_insert_with_key(|key| {
			states.push(State::new(key));
			states.len() - 1
		});
		&mut self.states[position]
	}

	/// Inserts a prebuilt state, replacing any state with the same key.
	#[cfg(test)]
	pub(crate) fn insert_state(&mut self, state: State) {
		match self.index.get(state.key()) {
			Some(&position) => self.states[position] = state,
			None => {
				self.index.insert(state.key().to_owned(), self.states.len());
				self.states.push(state);
			}
		}
	}

	/// Window length used as lookup key.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of distinct states.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	/// Returns `true` if no transition could be built.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Total number of recorded transitions (duplicates included).
	pub fn transition_count(&self) -> usize {
		self.states.iter().map(|state| state.successors().len()).sum()
	}

	/// Returns the state identified by `key`, if it was observed.
	pub fn state(&self, key: &str) -> Option<&State> {
		self.index.get(key).map(|&position| &self.states[position])
	}

	/// Returns the observed successors of `key`.
	///
	/// Returns `None` if the window never appeared with a successor.
	pub fn successors(&self, key: &str) -> Option<&[char]> {
		self.state(key).map(State::successors)
	}

	/// Iterates over the states in first-seen order.
	pub fn states(&self) -> impl Iterator<Item = &State> {
		self.states.iter()
	}

	/// Picks a state uniformly at random.
	///
	/// Returns `None` if the chain is empty.
	pub fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&State> {
		self.states.choose(rng)
	}

	/// Returns a short description of the chain dimensions.
	pub fn summary(&self) -> ChainSummary {
		ChainSummary {
			order: self.order,
			states: self.len(),
			transitions: self.transition_count(),
		}
	}
}

/// Dimensions of a built chain.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainSummary {
	pub order: usize,
	pub states: usize,
	pub transitions: usize,
}

impl fmt::Display for ChainSummary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"order {}, {} states, {} transitions",
			self.order, self.states, self.transitions
		)
	}
}
