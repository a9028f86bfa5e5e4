use rand::SeedableRng;
use rand::rngs::StdRng;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Default number of characters to generate.
pub const DEFAULT_LENGTH: usize = 100;

/// Source of the seed used by a generation call.
///
/// # Variants
/// - `Time`: derive a seed from the current time (not reproducible).
/// - `Fixed(u64)`: use the given seed (same inputs, same output).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Seed {
	#[default]
	Time,
	Fixed(u64),
}

impl Seed {
	/// Maps a signed seed to a `Seed`.
	///
	/// Negative values mean "use the current time".
	pub fn from_signed(seed: i64) -> Self {
		u64::try_from(seed).map_or(Seed::Time, Seed::Fixed)
	}

	/// Creates the random generator owned by one generation call.
	pub fn rng(self) -> StdRng {
		let seed = match self {
			Seed::Fixed(seed) => seed,
			Seed::Time => {
				let seed = time_seed();
				debug!(seed, "derived seed from current time");
				seed
			}
		};
		StdRng::seed_from_u64(seed)
	}
}

impl FromStr for Seed {
	type Err = String;

	/// Parses `"time"` or a signed integer.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if s.eq_ignore_ascii_case("time") {
			return Ok(Seed::Time);
		}
		s.parse::<i64>()
			.map(Seed::from_signed)
			.map_err(|_| format!("Seed must be an integer or 'time', got '{s}'"))
	}
}

/// Nanoseconds since the Unix epoch, truncated to 64 bits.
fn time_seed() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|elapsed| elapsed.as_nanos() as u64)
		.unwrap_or_default()
}

/// Parameters of one generation call.
///
/// # Fields
/// - `length`: total number of characters of the output, starter included
/// - `seed`: how the random generator of the call is seeded
/// - `starter`: text copied verbatim at the beginning of the output
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Target output length, in characters.
	pub length: usize,

	/// Seed of the per-call random generator.
	pub seed: Seed,

	/// Text prepended to the output, also used to seed the walk.
	pub starter: String,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			length: DEFAULT_LENGTH,
			seed: Seed::Time,
			starter: String::new(),
		}
	}
}

impl GenerationInput {
	/// Creates an input generating `length` characters with a time seed and
	/// no starter.
	pub fn new(length: usize) -> Self {
		Self {
			length,
			..Self::default()
		}
	}

	pub fn with_seed(mut self, seed: Seed) -> Self {
		self.seed = seed;
		self
	}

	pub fn with_starter(mut self, starter: impl Into<String>) -> Self {
		self.starter = starter.into();
		self
	}
}
