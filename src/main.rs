use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use speed_test::{compare::Compare, format, logging, suite::Kind};

#[derive(Parser)]
struct Args {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Run the benchmarks in this process and print their reports.
  Run {
    /// Only run this benchmark.
    #[arg(short, long, value_enum)]
    workload: Option<Kind>,
  },
  /// Compare against the C and Python versions of the benchmarks.
  Compare {
    /// Directory containing `c/` and `python/` benchmark sources.
    #[arg(long, default_value = "./programs")]
    programs_dir: PathBuf,
    /// C compiler.
    #[arg(long, default_value = "cc")]
    cc: String,
    /// Python interpreter.
    #[arg(long, default_value = "python3")]
    python: String,
    /// Seconds before an external program is killed.
    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,
  },
}

fn main() -> Result<()> {
  logging::init();

  match Args::parse().command {
    Command::Run { workload } => {
      let kinds = workload.map_or(Kind::ALL.to_vec(), |kind| vec![kind]);

      for kind in kinds {
        let finished = kind.run().with_context(|| format!("{kind:?}"))?;
        println!("{}", finished.report);
      }
    }
    Command::Compare {
      programs_dir,
      cc,
      python,
      timeout_secs,
    } => {
      if !programs_dir.exists() {
        anyhow::bail!("{programs_dir:?} does not exist");
      }

      let mut compare =
        Compare::new(programs_dir, cc, python, Duration::from_secs(timeout_secs)).context("Compare::new")?;
      compare.compare().context("compare")?;

      println!("{}", format::format(&compare.stats).context("format")?);
    }
  }

  Ok(())
}
