use std::path::PathBuf;

use clap::Parser;
use rs_markov_core::{DEFAULT_LENGTH, Seed};

/// Character-level Markov chain text generator.
///
/// Reads a corpus from a file (or standard input), builds a chain of the
/// requested order and prints generated text to standard output.
#[derive(Parser, Debug)]
#[command(name = "rs-markov", version, about = "Character-level Markov chain text generator")]
pub struct Cli {
	/// Order of the Markov chain (characters per state); 0 or less builds an empty chain.
	#[arg(short = 'k', long = "order", default_value_t = 1, allow_negative_numbers = true)]
	pub order: i64,

	/// Number of characters to generate (total output length); 0 or less prints an empty line.
	#[arg(short = 'l', long = "length", default_value_t = DEFAULT_LENGTH as i64, allow_negative_numbers = true)]
	pub length: i64,

	/// Input file (reads from standard input if not provided).
	#[arg(short, long)]
	pub input: Option<PathBuf>,

	/// Random seed; negative values use the current time.
	#[arg(long, default_value_t = -1, allow_negative_numbers = true)]
	pub seed: i64,

	/// Starter text to prepend to the output.
	#[arg(long, default_value = "", allow_hyphen_values = true)]
	pub starter: String,

	/// Print the chain dimensions to standard error after building it.
	#[arg(long)]
	pub stats: bool,

	/// Increase verbosity (-v info, -vv debug, -vvv trace).
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,
}

impl Cli {
	/// Chain order, negative values clamped to 0.
	pub fn order(&self) -> usize {
		usize::try_from(self.order).unwrap_or(0)
	}

	/// Output length, negative values clamped to 0.
	pub fn length(&self) -> usize {
		usize::try_from(self.length).unwrap_or(0)
	}

	/// Seed selected on the command line.
	pub fn seed(&self) -> Seed {
		Seed::from_signed(self.seed)
	}
}
