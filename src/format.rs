use std::fmt::Write;

use anyhow::Result;

use crate::stats::{Runtime, Stats};

const COLUMN_WIDTH: usize = 16;
const COLUMN_PADDING: &str = "  ";

fn format_header<'a, I: IntoIterator<Item = &'a str>>(runtimes: I) -> String {
  let header = vec!["benchmark"]
    .into_iter()
    .chain(runtimes)
    .enumerate()
    .map(|(i, col)| align(i, col))
    .collect::<Vec<_>>()
    .join(COLUMN_PADDING);

  format!("{header}\n{}", "=".repeat(header.len()))
}

/// First column is left aligned, timings are right aligned.
fn align(i: usize, col: &str) -> String {
  if i == 0 {
    format!("{col:<COLUMN_WIDTH$}")
  } else {
    format!("{col:>COLUMN_WIDTH$}")
  }
}

fn format_rows(stats: &Stats) -> Result<String> {
  let mut rows = String::new();

  for (name, benchmark) in &stats.benchmarks {
    let row = std::iter::once(name.clone())
      .chain(Runtime::ALL.iter().map(|&runtime| benchmark.cell(runtime)))
      .enumerate()
      .map(|(i, col)| align(i, &col))
      .collect::<Vec<_>>()
      .join(COLUMN_PADDING);

    writeln!(rows, "{row}")?;
  }

  Ok(rows)
}

pub fn format(stats: &Stats) -> Result<String> {
  let mut table = String::new();
  let runtimes = Runtime::ALL.map(|runtime| runtime.to_string());

  writeln!(table, "{}", format_header(runtimes.iter().map(String::as_str)))?;
  write!(table, "{}", format_rows(stats)?)?;

  Ok(table)
}
