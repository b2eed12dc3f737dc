#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "scenetab", about = "Scene-file tabular projection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print file-level information for a scene file.
	Info {
		path: PathBuf,
	},
	/// Stream the node listing projection as JSON lines.
	Nodes {
		path: PathBuf,
		#[arg(long = "batch-size", default_value_t = cmd::DEFAULT_BATCH_SIZE)]
		batch_size: usize,
	},
	/// Stream the property listing projection as JSON lines.
	Props {
		path: PathBuf,
		#[arg(long = "batch-size", default_value_t = cmd::DEFAULT_BATCH_SIZE)]
		batch_size: usize,
	},
	/// Stream the relationship target projection as JSON lines.
	Rels {
		path: PathBuf,
		#[arg(long = "batch-size", default_value_t = cmd::DEFAULT_BATCH_SIZE)]
		batch_size: usize,
	},
	/// Stream the resolved transform projection as JSON lines.
	Xforms {
		path: PathBuf,
		#[arg(long = "batch-size", default_value_t = cmd::DEFAULT_BATCH_SIZE)]
		batch_size: usize,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> scenetab::scene::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info { path } => cmd::info::run(path),
		Commands::Nodes { path, batch_size } => cmd::nodes::run(path, batch_size),
		Commands::Props { path, batch_size } => cmd::props::run(path, batch_size),
		Commands::Rels { path, batch_size } => cmd::rels::run(path, batch_size),
		Commands::Xforms { path, batch_size } => cmd::xforms::run(path, batch_size),
	}
}
