use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::info;

use crate::{
  harness, report,
  workload::{MonteCarloPi, NestedLoop, QuadraticResidues, Workload},
};

/// The benchmarks shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
  FunctionCall,
  Loop,
  MonteCarlo,
}

/// A finished in-process benchmark, ready to print.
#[derive(Debug)]
pub struct Finished {
  pub name: &'static str,
  pub nanos: u64,
  pub report: String,
}

impl Kind {
  pub const ALL: [Kind; 3] = [Kind::FunctionCall, Kind::Loop, Kind::MonteCarlo];

  /// Runs the benchmark once with its fixed parameters.
  pub fn run(self) -> Result<Finished> {
    match self {
      Kind::FunctionCall => {
        let mut workload = QuadraticResidues::benchmark();
        info!(modulus = workload.modulus, "starting function call test");

        let (residues, nanos) = timed(&mut workload);
        finished(&workload, nanos, report::function_call(residues, nanos))
      }
      Kind::Loop => {
        let mut workload = NestedLoop::benchmark();
        info!(outer = workload.outer_limit, inner = workload.inner_limit, "starting loop test");

        let (sum, nanos) = timed(&mut workload);
        finished(&workload, nanos, report::loop_test(sum, nanos))
      }
      Kind::MonteCarlo => {
        let mut workload = MonteCarloPi::benchmark().context("monte carlo rng")?;
        info!(iterations = workload.iterations, "starting monte carlo pi test");

        let (pi, nanos) = timed(&mut workload);
        finished(&workload, nanos, report::monte_carlo_pi(pi, nanos))
      }
    }
  }
}

fn timed<W: Workload>(workload: &mut W) -> (W::Output, u64) {
  harness::measure(|| workload.run())
}

fn finished<W: Workload>(workload: &W, nanos: u64, report: Result<String>) -> Result<Finished> {
  Ok(Finished {
    name: workload.name(),
    nanos,
    report: report.context("report")?,
  })
}

/// Entry point shared by the standalone benchmark binaries.
pub fn run_standalone(kind: Kind) -> Result<()> {
  crate::logging::init();

  let finished = kind.run().with_context(|| format!("{kind:?}"))?;
  print!("{}", finished.report);

  Ok(())
}
