use std::{
  io::Read,
  process::{Child, Command, ExitStatus, Stdio},
  time::Duration,
};

use anyhow::{Context, Result};
use wait_timeout::ChildExt as WaitExt;

#[extend::ext]
pub impl ExitStatus {
  /// A benchmark program or compiler that fails is reported as an error cell,
  /// never as a timing.
  fn check_success(&self) -> Result<()> {
    anyhow::ensure!(self.success(), "exited with {self}");

    Ok(())
  }
}

#[extend::ext]
pub impl Child {
  /// Waits at most `timeout`, then kills and reaps the child and returns
  /// `Ok(None)`.
  fn check_success_timeout(&mut self, timeout: Duration) -> Result<Option<()>> {
    let Some(status) = self.wait_timeout(timeout).context("wait")? else {
      self.kill().context("kill after timeout")?;
      self.wait().context("reap after kill")?;

      return Ok(None);
    };

    status.check_success()?;

    Ok(Some(()))
  }
}

#[extend::ext]
pub impl Command {
  /// Used for the C compiler: its stdout is discarded so the results table
  /// stays clean, diagnostics still reach stderr.
  fn quiet_status_timeout(&mut self, timeout: Duration) -> Result<Option<()>> {
    self
      .stdout(Stdio::null())
      .spawn()
      .context("spawn")?
      .check_success_timeout(timeout)
  }

  /// Runs a benchmark program and returns what it printed, or `Ok(None)` if
  /// it was killed after `timeout`.
  ///
  /// stdout is read after the child exits, so it must fit in the pipe buffer.
  fn status_stdout_timeout(&mut self, timeout: Duration) -> Result<Option<String>> {
    let mut child = self.stdout(Stdio::piped()).spawn().context("spawn")?;
    let mut stdout = child.stdout.take().context("stdout")?;

    if child.check_success_timeout(timeout)?.is_none() {
      return Ok(None);
    }

    let mut output = String::new();
    stdout.read_to_string(&mut output).context("read")?;

    Ok(Some(output))
  }
}
