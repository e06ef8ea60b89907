use std::{
  fs,
  path::{Path, PathBuf},
  time::Duration,
};

use anyhow::{Context, Result};
use tempfile::TempDir;
use tracing::{info, warn};

use crate::{
  run,
  stats::{Outcome, Runtime, Stats},
  suite::Kind,
};

const C_DIR: &str = "c";
const PYTHON_DIR: &str = "python";

pub struct Compare {
  /// Directory holding the `c/` and `python/` benchmark sources.
  programs_dir: PathBuf,
  /// C compiler executable.
  cc: String,
  /// Python interpreter executable.
  python: String,
  /// Per-program timeout for external runtimes.
  timeout: Duration,
  /// Results collected so far.
  pub stats: Stats,
  /// Temporary directory for compiled C binaries.
  tempdir: TempDir,
}

impl Compare {
  pub fn new(programs_dir: PathBuf, cc: String, python: String, timeout: Duration) -> Result<Self> {
    let tempdir = TempDir::with_prefix("speed-test-").context("tempdir")?;

    Ok(Self {
      programs_dir,
      cc,
      python,
      timeout,
      stats: Stats::default(),
      tempdir,
    })
  }

  pub fn compare(&mut self) -> Result<()> {
    self.bench_c().context("bench c")?;
    self.bench_python().context("bench python")?;
    self.bench_rust().context("bench rust")?;

    Ok(())
  }

  fn bench_c(&mut self) -> Result<()> {
    info!("benchmarking c");
    for source in self.programs(C_DIR, "c").context("programs")? {
      let name = program_name(&source)?;
      info!("  compiling {source:?}");

      let outcome = match run::compile_c(&self.cc, &source, self.tempdir.path(), self.timeout) {
        Ok(Some(binary)) => {
          info!("  running {binary:?}");
          run::binary(binary, self.timeout)
        }
        Ok(None) => Ok(None),
        Err(err) => Err(err),
      };

      self.record(&name, Runtime::C, outcome);
    }

    Ok(())
  }

  fn bench_python(&mut self) -> Result<()> {
    info!("benchmarking python");
    for script in self.programs(PYTHON_DIR, "py").context("programs")? {
      let name = program_name(&script)?;
      info!("  running {script:?}");

      let outcome = run::python(&self.python, &script, self.timeout);
      self.record(&name, Runtime::Python, outcome);
    }

    Ok(())
  }

  fn bench_rust(&mut self) -> Result<()> {
    info!("benchmarking rust");
    for kind in Kind::ALL {
      let (name, millis) = run::native(kind)?;
      self.record(name, Runtime::Rust, Ok(Some(millis)));
    }

    Ok(())
  }

  fn record(&mut self, name: &str, runtime: Runtime, outcome: Outcome) {
    match &outcome {
      Ok(Some(millis)) => info!("  {name} ({runtime}): {millis:.3} ms"),
      Ok(None) => warn!("  {name} ({runtime}): timed out after {:?}", self.timeout),
      Err(err) => warn!("  {name} ({runtime}): {err:#}"),
    }

    self.stats.record(name, runtime, outcome);
  }

  /// Sources in `programs_dir/subdir` with the given extension, sorted. A
  /// missing directory yields no programs.
  fn programs(&self, subdir: &str, extension: &str) -> Result<Vec<PathBuf>> {
    let dir = self.programs_dir.join(subdir);
    if !dir.is_dir() {
      warn!("{dir:?} does not exist, skipping");
      return Ok(Vec::new());
    }

    let mut programs = fs::read_dir(&dir)
      .with_context(|| format!("read dir {dir:?}"))?
      .map(|entry| Ok(entry?.path()))
      .collect::<Result<Vec<_>>>()?;

    programs.retain(|path| path.extension().is_some_and(|ext| ext == extension));
    programs.sort();

    Ok(programs)
  }
}

fn program_name(path: &Path) -> Result<String> {
  Ok(path.file_stem().context("file stem")?.to_string_lossy().into_owned())
}
