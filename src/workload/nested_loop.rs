use std::hint::black_box;

use super::Workload;

pub const OUTER_LIMIT: i64 = 1000;
pub const INNER_LIMIT: i64 = 1000;

const SUM_MODULUS: i64 = 100_000;

/// Runs `(outer_limit - 1) * (inner_limit - 1)` iterations of
/// `sum = (sum + i + j) % 100000`, with both indices starting at 1.
pub fn nested_loop_sum(outer_limit: i64, inner_limit: i64) -> i64 {
  let mut sum = 0;

  for i in 1..outer_limit {
    for j in 1..inner_limit {
      sum = (sum + i + j) % SUM_MODULUS;
    }
  }

  sum
}

#[derive(Debug, Clone, Copy)]
pub struct NestedLoop {
  pub outer_limit: i64,
  pub inner_limit: i64,
}

impl NestedLoop {
  pub fn benchmark() -> Self {
    Self {
      outer_limit: OUTER_LIMIT,
      inner_limit: INNER_LIMIT,
    }
  }
}

impl Workload for NestedLoop {
  type Output = i64;

  fn name(&self) -> &'static str {
    "loop_test"
  }

  fn run(&mut self) -> i64 {
    nested_loop_sum(black_box(self.outer_limit), black_box(self.inner_limit))
  }
}
