use tracing_subscriber::EnvFilter;

/// Workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["rs_markov_server", "rs_markov_core", "actix_web"];

/// Initialize tracing based on CLI verbosity level.
///
/// 0 -> info (the server reports its startup and uploads), 1 -> debug,
/// 2+ -> trace. `RUST_LOG` env var overrides the CLI flag if set.
pub fn init(verbosity: u8) {
	let level = match verbosity {
		0 => "info",
		1 => "debug",
		_ => "trace",
	};

	let default_filter: String = CRATE_TARGETS
		.iter()
		.map(|t| format!("{t}={level}"))
		.collect::<Vec<_>>()
		.join(",");

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}
