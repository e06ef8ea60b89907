//! Human-readable reports for the three standalone benchmarks.

use std::fmt::Write;

use anyhow::{Context, Result};

use crate::harness::nanos_to_millis;

const TIME_PREFIX: &str = "Time taken: ";

fn write_millis(out: &mut String, nanos: u64) -> Result<()> {
  writeln!(out, "{TIME_PREFIX}{:.3} ms", nanos_to_millis(nanos))?;

  Ok(())
}

pub fn function_call(residues: i64, nanos: u64) -> Result<String> {
  let mut out = String::new();

  writeln!(out, "Function call test complete.")?;
  writeln!(out, "Number of Quadratic Residues found (incl. 0): {residues}")?;
  write_millis(&mut out, nanos)?;

  Ok(out)
}

pub fn loop_test(sum: i64, nanos: u64) -> Result<String> {
  let mut out = String::new();

  writeln!(out, "Loop test complete. Final sum: {sum}")?;
  writeln!(out, "{TIME_PREFIX}{nanos} ns")?;
  write_millis(&mut out, nanos)?;

  Ok(out)
}

pub fn monte_carlo_pi(pi: f64, nanos: u64) -> Result<String> {
  let mut out = String::new();

  writeln!(out, "Monte Carlo Pi test complete.")?;
  writeln!(out, "Calculated Pi \u{3c0} \u{2248} {pi:.6}")?;
  write_millis(&mut out, nanos)?;

  Ok(out)
}

/// Extracts the millisecond figure from a report, i.e. the value of the first
/// `Time taken: <x> ms` line.
pub fn parse_millis(report: &str) -> Result<f64> {
  for line in report.lines() {
    let Some(rest) = line.trim().strip_prefix(TIME_PREFIX) else {
      continue;
    };
    let Some(value) = rest.strip_suffix(" ms") else {
      continue;
    };

    return value.trim().parse::<f64>().with_context(|| format!("invalid time {value:?}"));
  }

  anyhow::bail!("no line with {TIME_PREFIX:?} in ms found")
}
