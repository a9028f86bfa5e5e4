mod cli;
mod logging;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use rs_markov_core::io::read_corpus;
use rs_markov_core::{Chain, GenerationInput, Generator};
use tracing::info;

use crate::cli::Cli;

fn main() {
	let cli = Cli::parse();
	logging::init(cli.verbose);

	if let Err(e) = run(&cli) {
		eprintln!("Error: {e:#}");
		process::exit(1);
	}
}

fn run(cli: &Cli) -> Result<()> {
	let corpus = read_corpus(cli.input.as_deref()).context("failed to load corpus")?;
	info!(chars = corpus.chars().count(), "corpus loaded");

	let chain = Chain::build(&corpus, cli.order());
	if cli.stats {
		eprintln!("{}", chain.summary());
	}

	let input = GenerationInput::new(cli.length())
		.with_seed(cli.seed())
		.with_starter(cli.starter.as_str());
	let output = Generator::new(&chain).generate(&input);
	info!(chars = output.chars().count(), "text generated");

	let mut stdout = io::stdout().lock();
	writeln!(stdout, "{output}").context("failed to write output")?;
	Ok(())
}
