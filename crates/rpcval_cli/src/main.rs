#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "RPCVAL_LOG";

#[derive(Parser)]
#[command(name = "rpcval", about = "Json-rpc Data and Quantity conversion tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Convert a value to fixed-width json-rpc Data.
	Data(cmd::data::Args),
	/// Convert a value to a canonical json-rpc Quantity.
	Quantity(cmd::quantity::Args),
	/// Convert a value to a 20-byte address.
	Address(cmd::address::Args),
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> rpcval::jsonrpc::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Data(args) => cmd::data::run(args),
		Commands::Quantity(args) => cmd::quantity::run(args),
		Commands::Address(args) => cmd::address::run(args),
	}
}

fn init_tracing() {
	let filter = std::env::var(LOG_ENV)
		.ok()
		.map(|value| value.trim().to_owned())
		.filter(|value| !value.is_empty())
		.unwrap_or_else(|| "warn".to_owned());
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::new(filter))
		.with_target(true)
		.with_writer(std::io::stderr)
		.try_init();
}
