use anyhow::Result;
use speed_test::suite::{self, Kind};

fn main() -> Result<()> {
  suite::run_standalone(Kind::MonteCarlo)
}
