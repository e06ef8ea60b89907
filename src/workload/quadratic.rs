use std::hint::black_box;

use super::Workload;

/// Modulus used by the `function_call` benchmark.
pub const MODULUS: i64 = 5000;

/// Returns 1 if `n` is a quadratic residue modulo `m`, 0 otherwise.
///
/// `n` may be negative or larger than `m`; it is reduced into `[0, m)` first.
/// A non-positive `m` is never a valid modulus and always yields 0.
///
/// The scan is a deliberately naive linear search: the benchmark measures the
/// cost of calling this function `m` times, so it must stay O(m). Squares are
/// taken in `i128`, so every positive `i64` modulus is valid.
pub fn quad_res(n: i64, m: i64) -> i64 {
  if m <= 0 {
    return 0;
  }

  let target = n.rem_euclid(m);

  for i in 0..m {
    if (i as i128 * i as i128 % m as i128) as i64 == target {
      return 1;
    }
  }

  0
}

/// Counts the quadratic residues in `[0, m)`, including 0.
pub fn count_quadratic_residues(m: i64) -> i64 {
  (0..m).map(|n| quad_res(n, m)).sum()
}

#[derive(Debug, Clone, Copy)]
pub struct QuadraticResidues {
  pub modulus: i64,
}

impl QuadraticResidues {
  pub fn benchmark() -> Self {
    Self { modulus: MODULUS }
  }
}

impl Workload for QuadraticResidues {
  type Output = i64;

  fn name(&self) -> &'static str {
    "function_call"
  }

  fn run(&mut self) -> i64 {
    count_quadratic_residues(black_box(self.modulus))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn small_moduli() {
    assert_eq!(count_quadratic_residues(1), 1);
    assert_eq!(count_quadratic_residues(2), 2);
    // {0, 1, 4}
    assert_eq!(count_quadratic_residues(5), 3);
    assert_eq!(count_quadratic_residues(8), 3);
    // {0, 1, 4, 5, 6, 9}
    assert_eq!(count_quadratic_residues(10), 6);
    assert_eq!(count_quadratic_residues(12), 4);
  }

  #[test]
  fn zero_is_always_a_residue() {
    for m in 1..50 {
      assert_eq!(quad_res(0, m), 1, "m = {m}");
    }
  }

  #[test]
  fn normalizes_out_of_range_candidates() {
    // -1 = 4 (mod 5), which is 2^2.
    assert_eq!(quad_res(-1, 5), 1);
    // 7 = 2 (mod 5), not a square.
    assert_eq!(quad_res(7, 5), 0);
    assert_eq!(quad_res(-3, 5), 0);
    assert_eq!(quad_res(14, 10), 1);
  }

  #[test]
  fn largest_modulus() {
    assert_eq!(quad_res(1, i64::MAX), 1);
    assert_eq!(quad_res(i64::MAX, i64::MAX), 1);
    // 4 - (2^63 - 1) = 4 (mod 2^63 - 1)
    assert_eq!(quad_res(4 - i64::MAX, i64::MAX), 1);
  }

  #[test]
  fn non_positive_modulus_is_zero() {
    for m in [0, -1, -7, i64::MIN] {
      for n in [-3, 0, 1, 5] {
        assert_eq!(quad_res(n, m), 0);
      }
      assert_eq!(count_quadratic_residues(m), 0);
    }
  }

  #[test]
  fn count_is_bounded_by_modulus() {
    for m in 1..120 {
      let count = count_quadratic_residues(m);
      assert!((1..=m).contains(&count), "m = {m}, count = {count}");
    }
  }

  #[test]
  fn workload_uses_configured_modulus() {
    let mut workload = QuadraticResidues { modulus: 1000 };
    assert_eq!(workload.run(), 159);
    assert_eq!(QuadraticResidues::benchmark().modulus, MODULUS);
  }
}
