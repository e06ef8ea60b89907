use std::{collections::BTreeMap, fmt};

use anyhow::Result;

/// Milliseconds reported by a single program run.
pub type Timing = f64;

/// A program's outcome: `Ok(None)` means it was killed after the timeout.
pub type Outcome = Result<Option<Timing>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Runtime {
  C,
  Python,
  Rust,
}

impl Runtime {
  pub const ALL: [Runtime; 3] = [Runtime::C, Runtime::Python, Runtime::Rust];
}

impl fmt::Display for Runtime {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Runtime::C => "c",
      Runtime::Python => "python",
      Runtime::Rust => "rust",
    })
  }
}

/// Comparison results, keyed by benchmark name (`loop_test`, ...).
#[derive(Default)]
pub struct Stats {
  pub benchmarks: BTreeMap<String, Benchmark>,
}

impl Stats {
  pub fn record(&mut self, benchmark: &str, runtime: Runtime, outcome: Outcome) {
    self
      .benchmarks
      .entry(benchmark.to_string())
      .or_default()
      .runtimes
      .insert(runtime, outcome);
  }
}

/// One benchmark across every runtime it was run on.
#[derive(Default)]
pub struct Benchmark {
  pub runtimes: BTreeMap<Runtime, Outcome>,
}

impl Benchmark {
  /// Table cell for `runtime`.
  pub fn cell(&self, runtime: Runtime) -> String {
    match self.runtimes.get(&runtime) {
      Some(Ok(Some(millis))) => format!("{millis:.3} ms"),
      Some(Ok(None)) => "timeout".to_string(),
      Some(Err(_)) => "error".to_string(),
      None => "-".to_string(),
    }
  }
}
