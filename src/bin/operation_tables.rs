use posets::logging::setup_logging;
use posets::*;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use itertools::Itertools;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Table {
  Supremum,
  Infimum,
  PseudoComplement,
  All,
}

/// Print the supremum, infimum and pseudo-complement tables of a poset.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the edge list
    input: std::path::PathBuf,

    /// Which table to print
    #[arg(long, value_enum, default_value_t = Table::All)]
    table: Table,

    /// Log more, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Widest label in characters, at least one for the `-` placeholder.
fn column_width(labels: &[String]) -> usize {
  labels.iter()
    .map(|label| label.chars().count())
    .chain(std::iter::once(1))
    .max()
    .unwrap_or(1)
}

fn print_table(name: &str, poset: &Poset, table: &OperationTable) {
  let label = |cell: &Option<usize>| match cell {
    Some(i) => poset.elements()[*i].as_str(),
    None => "-",
  };
  let width = column_width(poset.elements());
  println!("{}", name);
  println!("{:width$} | {}", "", poset.elements().iter().map(|e| format!("{:width$}", e)).join(" "));
  for (element, row) in poset.elements().iter().zip(table.rows()) {
    println!("{:width$} | {}", element, row.iter().map(|cell| format!("{:width$}", label(cell))).join(" "));
  }
  let missing = table.missing().count();
  if missing > 0 {
    println!("{} undefined", missing);
  }
  println!();
}

fn main() -> anyhow::Result<()> {
  let args = Args::parse();
  setup_logging(args.verbose);
  let snippet = std::fs::read_to_string(&args.input)
    .with_context(|| format!("reading {}", args.input.display()))?;
  let poset: Poset = snippet.parse()?;

  if matches!(args.table, Table::Supremum | Table::All) {
    print_table("supremum", &poset, poset.supremums());
  }
  if matches!(args.table, Table::Infimum | Table::All) {
    print_table("infimum", &poset, poset.infimums());
  }
  if matches!(args.table, Table::PseudoComplement | Table::All) {
    match poset.pseudo_complements() {
      Some(table) => print_table("pseudo-complement", &poset, table),
      None => println!("pseudo-complement\nundefined: some infimums are missing\n"),
    }
  }
  Ok(())
}
