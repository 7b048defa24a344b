//! `hle-svc`: inspect and exercise HLE service command tables.
//!
//! Operates on the `hid:dbg` endpoint:
//! - `list`: every command id with its name and implementation status
//! - `check`: id collisions under the configured duplicate policy
//! - `call`: dispatch one request and print the guest result code

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use hle_config::Config;

mod commands;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "hle-svc")]
#[command(about = "Inspect and exercise HLE service command tables")]
struct Args {
	/// Configuration file (TOML)
	#[arg(short, long, value_name = "PATH", global = true)]
	config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
	/// List every command of the hid:dbg endpoint
	List,
	/// Report command id collisions; fails if any id is ambiguous
	Check,
	/// Dispatch one request and print the result code
	Call {
		/// Command id (decimal or 0x-prefixed hex)
		#[arg(value_parser = parse_word)]
		id: u32,
		/// Raw command buffer words (decimal or 0x-prefixed hex)
		#[arg(value_parser = parse_word)]
		words: Vec<u32>,
	},
}

fn parse_word(input: &str) -> Result<u32, std::num::ParseIntError> {
	match input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
		Some(hex) => u32::from_str_radix(hex, 16),
		None => input.parse(),
	}
}

/// Resolves the configuration; a missing file falls back to the defaults.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
	match path {
		Some(path) => Config::load_or_default(path)
			.with_context(|| format!("loading config {}", path.display())),
		None => Ok(Config::default()),
	}
}

fn main() -> anyhow::Result<ExitCode> {
	let args = Args::parse();

	let config = load_config(args.config.as_deref())?;

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if args.verbose {
			tracing::Level::DEBUG
		} else {
			config.logging.level.into()
		})
		.with_writer(std::io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let options = config.service_options();
	let mut out = std::io::stdout().lock();
	let ok = match args.command {
		Command::List => commands::list(options, &mut out)?,
		Command::Check => commands::check(options, &mut out)?,
		Command::Call { id, words } => commands::call(options, id, words, &mut out)?,
	};

	Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
