use std::{
  path::{Path, PathBuf},
  process::Command,
  time::Duration,
};

use anyhow::{Context, Result};

use crate::{
  ext::CommandExt,
  harness::nanos_to_millis,
  report,
  stats::{Outcome, Timing},
  suite::Kind,
};

/// Compiles the C program at `source` with `cc -O2`, placing the binary in
/// `out_dir` under the source's file stem. Returns `Ok(None)` if the compiler
/// is still running after `timeout`.
///
/// # Errors
///
/// This will return an error if:
/// - `source` has no file stem.
/// - the compiler exits with a non-zero status.
pub fn compile_c(cc: &str, source: &Path, out_dir: &Path, timeout: Duration) -> Result<Option<PathBuf>> {
  let stem = source.file_stem().context("file stem")?;
  let binary = out_dir.join(stem);

  let finished = Command::new(cc)
    .arg("-O2")
    .arg("-o")
    .arg(&binary)
    .arg(source)
    .quiet_status_timeout(timeout)
    .with_context(|| format!("{cc} {source:?}"))?;

  Ok(finished.map(|()| binary))
}

/// Runs `command` and parses the millisecond timing out of its stdout.
fn timed(command: &mut Command, timeout: Duration) -> Outcome {
  let Some(stdout) = command.status_stdout_timeout(timeout)? else {
    return Ok(None);
  };

  report::parse_millis(&stdout).map(Some).context("parse")
}

pub fn binary<P: AsRef<Path>>(binary: P, timeout: Duration) -> Outcome {
  let binary = binary.as_ref();

  timed(&mut Command::new(binary), timeout).with_context(|| format!("{binary:?}"))
}

pub fn python<P: AsRef<Path>>(python: &str, script: P, timeout: Duration) -> Outcome {
  let script = script.as_ref();

  timed(Command::new(python).arg(script), timeout).with_context(|| format!("{python} {script:?}"))
}

/// Runs a benchmark in this process. In-process runs are never killed, so
/// there is no timeout.
pub fn native(kind: Kind) -> Result<(&'static str, Timing)> {
  let finished = kind.run().with_context(|| format!("{kind:?}"))?;

  Ok((finished.name, nanos_to_millis(finished.nanos)))
}
