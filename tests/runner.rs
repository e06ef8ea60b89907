use std::{fs, os::unix::fs::PermissionsExt, path::PathBuf, time::Duration};

use speed_test::{compare::Compare, format, run, stats::Runtime, suite::Kind};
use tempfile::TempDir;

const TIMEOUT: Duration = Duration::from_secs(30);

fn script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
  let path = dir.path().join(name);
  fs::write(&path, body).unwrap();

  path
}

#[test]
fn parses_timing_from_stdout() {
  let dir = TempDir::new().unwrap();
  let path = script(&dir, "ok.sh", "echo 'Loop test complete. Final sum: 1000'\necho 'Time taken: 1.250 ms'\n");

  assert_eq!(run::python("sh", &path, TIMEOUT).unwrap(), Some(1.25));
}

#[test]
fn non_zero_exit_is_an_error() {
  let dir = TempDir::new().unwrap();
  let path = script(&dir, "fail.sh", "echo 'Time taken: 1.000 ms'\nexit 3\n");

  assert!(run::python("sh", &path, TIMEOUT).is_err());
}

#[test]
fn missing_timing_is_an_error() {
  let dir = TempDir::new().unwrap();
  let path = script(&dir, "quiet.sh", "echo hello\n");

  assert!(run::python("sh", &path, TIMEOUT).is_err());
}

#[test]
fn slow_program_times_out() {
  let dir = TempDir::new().unwrap();
  let path = script(&dir, "slow.sh", "sleep 5\n");

  assert_eq!(run::python("sh", &path, Duration::from_millis(100)).unwrap(), None);
}

#[test]
fn missing_binary_is_an_error() {
  assert!(run::binary("/definitely/not/here", TIMEOUT).is_err());
}

fn executable(dir: &TempDir, name: &str, body: &str) -> String {
  let path = script(dir, name, body);
  fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

  path.to_string_lossy().into_owned()
}

#[test]
fn hanging_compiler_times_out() {
  let dir = TempDir::new().unwrap();
  let cc = executable(&dir, "cc.sh", "#!/bin/sh\nsleep 5\n");
  let source = script(&dir, "loop_test.c", "int main(void) { return 0; }\n");

  let compiled = run::compile_c(&cc, &source, dir.path(), Duration::from_millis(100)).unwrap();
  assert_eq!(compiled, None);
}

#[test]
fn compiler_output_is_placed_under_source_stem() {
  let dir = TempDir::new().unwrap();
  let cc = executable(&dir, "cc.sh", "#!/bin/sh\necho compiled\n");
  let source = script(&dir, "loop_test.c", "int main(void) { return 0; }\n");

  let compiled = run::compile_c(&cc, &source, dir.path(), TIMEOUT).unwrap();
  assert_eq!(compiled, Some(dir.path().join("loop_test")));
}

#[test]
fn failing_compiler_is_an_error() {
  let dir = TempDir::new().unwrap();
  let cc = executable(&dir, "cc.sh", "#!/bin/sh\nexit 1\n");
  let source = script(&dir, "loop_test.c", "int main(void) { return 0; }\n");

  assert!(run::compile_c(&cc, &source, dir.path(), TIMEOUT).is_err());
}

#[test]
fn compare_reports_compiler_timeout() {
  let programs = TempDir::new().unwrap();
  fs::create_dir(programs.path().join("c")).unwrap();
  fs::write(programs.path().join("c/loop_test.c"), "int main(void) { return 0; }\n").unwrap();
  let cc = executable(&programs, "cc.sh", "#!/bin/sh\nsleep 5\n");

  let mut compare = Compare::new(programs.path().to_path_buf(), cc, "sh".into(), Duration::from_millis(100)).unwrap();
  compare.compare().unwrap();

  assert_eq!(compare.stats.benchmarks["loop_test"].cell(Runtime::C), "timeout");
}

#[test]
fn native_run_reports_millis() {
  let (name, millis) = run::native(Kind::Loop).unwrap();

  assert_eq!(name, "loop_test");
  assert!(millis >= 0.0);
}

#[test]
fn compare_collects_every_runtime() {
  let programs = TempDir::new().unwrap();
  fs::create_dir(programs.path().join("python")).unwrap();
  fs::write(programs.path().join("python/loop_test.py"), "echo 'Time taken: 2.500 ms'\n").unwrap();
  fs::write(programs.path().join("python/notes.txt"), "ignored").unwrap();

  // No `c/` directory: the C runtime is skipped. `sh` stands in for python.
  let mut compare = Compare::new(programs.path().to_path_buf(), "cc".into(), "sh".into(), TIMEOUT).unwrap();
  compare.compare().unwrap();

  let stats = &compare.stats;
  assert_eq!(stats.benchmarks.len(), 3);

  let loop_test = &stats.benchmarks["loop_test"];
  assert_eq!(loop_test.cell(Runtime::Python), "2.500 ms");
  assert_eq!(loop_test.cell(Runtime::C), "-");
  assert!(loop_test.runtimes[&Runtime::Rust].is_ok());

  let table = format::format(stats).unwrap();
  assert!(table.contains("monte_carlo_pi"));
  assert!(table.contains("function_call"));
}
