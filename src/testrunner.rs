use crate::error::Result;
use std::path::PathBuf;
use std::process::Command;

/// Runner for the project's test suite.
///
/// `run` reports whether the suite passed. Only a clean, zero-failure
/// report counts as a pass; callers treat `Err` the same as a failed run.
pub trait TestRunner {
    /// Run the test suite and report the outcome
    fn run(&self) -> Result<bool>;
}

/// Test runner that invokes an external command over a test directory.
///
/// The command's argv comes from configuration (e.g., `python -m pytest`);
/// the test directory and a verbose flag are appended. A non-zero exit
/// status or a `FAILED` marker in the captured output counts as failure.
pub struct ProcessTestRunner {
    command: Vec<String>,
    test_dir: PathBuf,
}

impl ProcessTestRunner {
    /// Create a runner for the given command argv and test directory
    pub fn new(command: Vec<String>, test_dir: impl Into<PathBuf>) -> Self {
        ProcessTestRunner {
            command,
            test_dir: test_dir.into(),
        }
    }
}

impl TestRunner for ProcessTestRunner {
    fn run(&self) -> Result<bool> {
        let (program, args) = match self.command.split_first() {
            Some(split) => split,
            None => return Ok(false),
        };

        let output = Command::new(program)
            .args(args)
            .arg(&self.test_dir)
            .arg("-v")
            .output()?;

        if !output.status.success() {
            return Ok(false);
        }

        let report = String::from_utf8_lossy(&output.stdout);
        Ok(!report.contains("FAILED"))
    }
}
