use std::time::Instant;

const NANOS_PER_MICRO: f64 = 1e3;
const NANOS_PER_MILLI: f64 = 1e6;

/// Runs `workload` once and returns its value along with the elapsed time in
/// nanoseconds, read from the monotonic clock.
pub fn measure<F, R>(workload: F) -> (R, u64)
where
  F: FnOnce() -> R,
{
  let run = Run::record(workload);
  let nanos = run.nanos();

  (run.into_value(), nanos)
}

/// A single timed execution of a workload. Immutable once recorded.
#[derive(Debug, Clone)]
pub struct Run<T> {
  start: Instant,
  end: Instant,
  value: T,
}

impl<T> Run<T> {
  pub fn record<F: FnOnce() -> T>(workload: F) -> Self {
    let start = Instant::now();
    let value = workload();
    let end = Instant::now();

    Self { start, end, value }
  }

  pub fn value(&self) -> &T {
    &self.value
  }

  pub fn into_value(self) -> T {
    self.value
  }

  /// Elapsed nanoseconds, saturating at `u64::MAX` (about 584 years).
  pub fn nanos(&self) -> u64 {
    let nanos = self.end.saturating_duration_since(self.start).as_nanos();

    u64::try_from(nanos).unwrap_or(u64::MAX)
  }

  pub fn micros(&self) -> f64 {
    nanos_to_micros(self.nanos())
  }

  pub fn millis(&self) -> f64 {
    nanos_to_millis(self.nanos())
  }
}

pub fn nanos_to_micros(nanos: u64) -> f64 {
  nanos as f64 / NANOS_PER_MICRO
}

pub fn nanos_to_millis(nanos: u64) -> f64 {
  nanos as f64 / NANOS_PER_MILLI
}
