use std::{
  hint::black_box,
  time::{SystemTime, UNIX_EPOCH},
};

use anyhow::{Context, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::Workload;

pub const ITERATIONS: u64 = 10_000_000;

/// Estimates π by sampling `iterations` points in the unit square and counting
/// those inside the quarter circle. Zero iterations estimate 0.0.
pub fn estimate_pi<R: Rng + ?Sized>(rng: &mut R, iterations: u64) -> f64 {
  if iterations == 0 {
    return 0.0;
  }

  let mut inside = 0u64;

  for _ in 0..iterations {
    let x: f64 = rng.gen();
    let y: f64 = rng.gen();

    if x * x + y * y <= 1.0 {
      inside += 1;
    }
  }

  4.0 * inside as f64 / iterations as f64
}

/// The generator used outside of tests, seeded from the system clock.
pub fn time_seeded_rng() -> Result<StdRng> {
  let since_epoch = SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .context("system clock is before the unix epoch")?;

  Ok(StdRng::seed_from_u64(since_epoch.as_nanos() as u64))
}

pub struct MonteCarloPi<R> {
  pub iterations: u64,
  rng: R,
}

impl<R: Rng> MonteCarloPi<R> {
  pub fn new(rng: R, iterations: u64) -> Self {
    Self { iterations, rng }
  }
}

impl MonteCarloPi<StdRng> {
  pub fn benchmark() -> Result<Self> {
    Ok(Self::new(time_seeded_rng().context("seed")?, ITERATIONS))
  }
}

impl<R: Rng> Workload for MonteCarloPi<R> {
  type Output = f64;

  fn name(&self) -> &'static str {
    "monte_carlo_pi"
  }

  fn run(&mut self) -> f64 {
    estimate_pi(&mut self.rng, black_box(self.iterations))
  }
}
