mod logging;
mod routes;

use std::path::PathBuf;
use std::process;
use std::sync::RwLock;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use clap::Parser;
use rs_markov_core::Chain;
use rs_markov_core::io::read_corpus;
use tracing::info;

use crate::routes::SharedData;

/// HTTP front-end for the Markov chain text generator.
#[derive(Parser, Debug)]
#[command(name = "rs-markov-server", version, about = "Serves Markov chain text generation over HTTP")]
struct Cli {
	/// Address to bind.
	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	/// Port to bind.
	#[arg(short, long, default_value_t = 5000)]
	port: u16,

	/// Corpus file to load at startup (the chain starts empty otherwise).
	#[arg(short, long)]
	input: Option<PathBuf>,

	/// Order of the chain built from `--input`; 0 or less builds an empty chain.
	#[arg(short = 'k', long = "order", default_value_t = 1, allow_negative_numbers = true)]
	order: i64,

	/// Increase verbosity (-v debug, -vv trace).
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

/// Main entry point for the server.
///
/// Builds the initial chain, wraps it in a `RwLock` shared by every worker
/// and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() {
	let cli = Cli::parse();
	logging::init(cli.verbose);

	if let Err(e) = run(cli).await {
		eprintln!("Error: {e:#}");
		process::exit(1);
	}
}

async fn run(cli: Cli) -> Result<()> {
	let chain = match &cli.input {
		Some(path) => {
			let corpus = read_corpus(Some(path)).context("failed to load corpus")?;
			Chain::build(&corpus, usize::try_from(cli.order).unwrap_or(0))
		}
		None => Chain::default(),
	};
	info!(summary = %chain.summary(), "initial chain ready");

	let shared_data = web::Data::new(RwLock::new(SharedData { chain }));

	info!(host = %cli.host, port = cli.port, "starting server");
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.configure(routes::configure)
	})
	.bind((cli.host.as_str(), cli.port))
	.with_context(|| format!("failed to bind {}:{}", cli.host, cli.port))?
	.run()
	.await
	.context("server error")
}
