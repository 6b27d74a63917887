#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "rt3scene", about = "RT3 scene description inspection tools")]
struct Cli {
	/// Log every tag and attribute as it is processed.
	#[arg(short, long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Parse a scene file and print the setup calls it produces.
	Parse(cmd::parse::Args),
	/// List the recognized tags and their attributes.
	Tags(cmd::tags::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> rt3scene::scene::Result<()> {
	match command {
		Commands::Parse(args) => cmd::parse::run(args),
		Commands::Tags(args) => cmd::tags::run(args),
	}
}

fn init_tracing(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}
