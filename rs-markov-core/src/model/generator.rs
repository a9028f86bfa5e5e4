use crate::model::chain::Chain;
use crate::model::generation_input::GenerationInput;
use rand::Rng;
use tracing::debug;

/// Text generator walking a character-level Markov chain.
///
/// # Responsibilities
/// - Seed the walk from the starter, or from a random state
/// - Sample successors uniformly and slide the cursor one character per step
/// - Degrade gracefully on degenerate chains (empty table, dead ends)
///
/// The chain is borrowed read-only and every call owns its random generator,
/// so a single chain can serve any number of independent generations.
#[derive(Clone, Copy, Debug)]
pub struct Generator<'a> {
	chain: &'a Chain,
}

impl<'a> Generator<'a> {
	/// Creates a generator over `chain`.
	pub fn new(chain: &'a Chain) -> Self {
		Self { chain }
	}

	/// Generates text according to `input`.
	///
	/// A random generator is created for this call only, from `input.seed`.
	pub fn generate(&self, input: &GenerationInput) -> String {
		if input.length == 0 {
			return String::new();
		}
		let mut rng = input.seed.rng();
		self.generate_with_rng(input.length, &input.starter, &mut rng)
	}

	/// Generates `length` characters, starting with `starter`, drawing from `rng`.
	///
	/// # Behavior
	/// - `length == 0` returns an empty string.
	/// - An empty chain, or a starter of at least `length` characters, returns
	///   the starter truncated to `length` characters.
	/// - Otherwise the output is the starter followed by generated characters.
	///   The walk starts from the last `order` characters of the starter, or
	///   from a random state (not emitted) when the starter is shorter.
	/// - An unknown cursor is replaced by a random state. If that state has
	///   no successor either, generation stops and the output is shorter
	///   than `length`.
	///
	/// # Notes
	/// - Lengths are counted in characters (Unicode scalar values).
	pub fn generate_with_rng<R: Rng + ?Sized>(&self, length: usize, starter: &str, rng: &mut R) -> String {
		if length == 0 {
			return String::new();
		}

		let starter_len = starter.chars().count();
		if self.chain.is_empty() || starter_len >= length {
			// Nothing to walk, or nothing left to generate
			return starter.chars().take(length).collect();
		}

		let order = self.chain.order();
		// `length` is caller-controlled, only the starter sizes the buffer
		let mut output = String::with_capacity(starter.len());
		output.push_str(starter);

		let mut cursor: String = if starter_len >= order {
			starter.chars().skip(starter_len - order).collect()
		} else {
			match self.chain.random_state(rng) {
				Some(state) => state.key().to_owned(),
				None => return output,
			}
		};

		for _ in starter_len..length {
			let next = match self.chain.state(&cursor).and_then(|state| state.predict(rng)) {
				Some(c) => c,
				None => {
					// Unknown or dead-end cursor, restart from a random state
					let Some(state) = self.chain.random_state(rng) else {
						break;
					};
					cursor = state.key().to_owned();
					match state.predict(rng) {
						Some(c) => c,
						None => {
							debug!(
								generated = output.chars().count(),
								length,
								"random state has no successor, stopping early"
							);
							break;
						}
					}
				}
			};

			output.push(next);
			slide(&mut cursor, next);
		}

		output
	}
}

/// Drops the first character of `cursor` and appends `next`.
fn slide(cursor: &mut String, next: char) {
	if !cursor.is_empty() {
		cursor.remove(0);
	}
	cursor.push(next);
}
