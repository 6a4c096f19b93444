use posets::logging::setup_logging;
use posets::*;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
  Text,
  Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Backend {
  Matrix,
  Bitvec,
}

/// Classify a finite partial order given as lines of `a -> b -> c`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the edge list, stdin when omitted
    input: Option<PathBuf>,

    /// Where to write the Hasse diagram in DOT language
    #[arg(long)]
    dot: Option<PathBuf>,

    /// How to print the findings
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// How to store the order relation
    #[arg(long, value_enum, default_value_t = Backend::Matrix)]
    backend: Backend,

    /// Log more, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
  match path {
    Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display())),
    None => {
      let mut snippet = String::new();
      std::io::stdin().lock().read_to_string(&mut snippet).context("reading stdin")?;
      Ok(snippet)
    }
  }
}

fn run<R: Relation>(args: &Args, snippet: &str) -> anyhow::Result<()> {
  let poset = Poset::<R>::parse(snippet)?;
  if let Some(dot) = &args.dot {
    std::fs::write(dot, poset.to_dot()).with_context(|| format!("writing {}", dot.display()))?;
    info!("wrote {} generators to {}", poset.generators().len(), dot.display());
  }
  let report = Report::of(&poset);
  match args.format {
    Format::Text => print!("{}", report),
    Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
  }
  Ok(())
}

fn main() -> anyhow::Result<()> {
  let args = Args::parse();
  setup_logging(args.verbose);
  let snippet = read_input(args.input.as_deref())?;
  match args.backend {
    Backend::Matrix => run::<MatrixRelation>(&args, &snippet),
    Backend::Bitvec => run::<BitVectorRelation>(&args, &snippet),
  }
}
