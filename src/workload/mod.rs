//! The three benchmark workloads. Each one is a plain struct carrying its
//! parameters, run once under [`crate::harness`].

pub mod monte_carlo;
pub mod nested_loop;
pub mod quadratic;

pub use self::{monte_carlo::MonteCarloPi, nested_loop::NestedLoop, quadratic::QuadraticResidues};

pub trait Workload {
  type Output;

  fn name(&self) -> &'static str;

  fn run(&mut self) -> Self::Output;
}
