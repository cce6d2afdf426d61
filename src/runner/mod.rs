//! runner
//!
//! Runs app entrypoints as child processes.
//!
//! # Contract
//!
//! - One child at a time, waited on synchronously
//! - stdout and stderr are captured in full, not streamed
//! - stdin is inherited, so an app can read what the user types
//! - No timeout: the launcher blocks until the child exits
//! - A spawn failure or non-zero exit is reported in the result, never
//!   returned as an error
//!
//! The [`AppRunner`] trait is the seam the navigation controller depends
//! on, so menus can be driven in tests without spawning anything.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde::Serialize;
use thiserror::Error;

/// Why a run did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum RunFailure {
    /// The child could not be started.
    #[error("failed to start: {0}")]
    SpawnFailed(String),

    /// The child ran and exited unsuccessfully.
    #[error("{}", describe_exit(.code, .stderr))]
    NonZeroExit { code: Option<i32>, stderr: String },
}

fn describe_exit(code: &Option<i32>, stderr: &str) -> String {
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Outcome of one entrypoint execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessResult {
    pub exit_succeeded: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub failure: Option<RunFailure>,
}

impl ProcessResult {
    /// Result for a child that exited successfully.
    pub fn success(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_succeeded: true,
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: stderr.into(),
            failure: None,
        }
    }

    /// Result for a child that could not be started.
    pub fn spawn_failed(reason: impl Into<String>) -> Self {
        Self {
            exit_succeeded: false,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            failure: Some(RunFailure::SpawnFailed(reason.into())),
        }
    }

    /// Build a result from a finished child.
    pub fn from_output(output: Output) -> Self {
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            return Self::success(stdout, stderr);
        }

        let code = output.status.code();
        Self {
            exit_succeeded: false,
            exit_code: code,
            failure: Some(RunFailure::NonZeroExit {
                code,
                stderr: stderr.clone(),
            }),
            stdout,
            stderr,
        }
    }

    /// Human-readable failure text, if the run failed.
    ///
    /// This is the captured stderr, the spawn error, or a status line when
    /// the child failed silently.
    pub fn failure_reason(&self) -> Option<String> {
        self.failure.as_ref().map(|f| f.to_string())
    }
}

/// Something that can run an entrypoint.
pub trait AppRunner {
    /// Run `entrypoint` to completion and report what happened.
    fn execute(&self, entrypoint: &Path) -> ProcessResult;
}

/// Runs entrypoints through an interpreter as real child processes.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    interpreter: String,
}

impl ProcessRunner {
    /// Create a runner that invokes `<interpreter> <entrypoint>`.
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// Get the interpreter program.
    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }
}

impl AppRunner for ProcessRunner {
    fn execute(&self, entrypoint: &Path) -> ProcessResult {
        log::debug!("spawning {} {}", self.interpreter, entrypoint.display());

        match Command::new(&self.interpreter)
            .arg(entrypoint)
            .stdin(Stdio::inherit())
            .output()
        {
            Ok(output) => {
                let result = ProcessResult::from_output(output);
                log::debug!(
                    "{} exited (success: {}, code: {:?})",
                    entrypoint.display(),
                    result.exit_succeeded,
                    result.exit_code
                );
                result
            }
            Err(e) => {
                log::debug!("failed to spawn {}: {}", self.interpreter, e);
                ProcessResult::spawn_failed(format!("{}: {}", self.interpreter, e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_reason_prefers_stderr() {
        let failure = RunFailure::NonZeroExit {
            code: Some(2),
            stderr: "boom\n".into(),
        };
        assert_eq!(failure.to_string(), "boom");
    }

    #[test]
    fn failure_reason_falls_back_to_status() {
        let failure = RunFailure::NonZeroExit {
            code: Some(3),
            stderr: "  ".into(),
        };
        assert_eq!(failure.to_string(), "exited with status 3");

        let killed = RunFailure::NonZeroExit {
            code: None,
            stderr: String::new(),
        };
        assert_eq!(killed.to_string(), "terminated by signal");
    }

    #[test]
    fn success_has_no_failure_reason() {
        let result = ProcessResult::success("out", "");
        assert!(result.exit_succeeded);
        assert!(result.failure_reason().is_none());
    }

    #[test]
    fn spawn_failure_reports_reason() {
        let runner = ProcessRunner::new("definitely-not-a-real-interpreter-42");
        let result = runner.execute(Path::new("main.py"));
        assert!(!result.exit_succeeded);
        assert!(matches!(result.failure, Some(RunFailure::SpawnFailed(_))));
        assert!(result
            .failure_reason()
            .unwrap()
            .contains("definitely-not-a-real-interpreter-42"));
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::fs;
        use tempfile::TempDir;

        fn script(body: &str) -> (TempDir, std::path::PathBuf) {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("main.sh");
            fs::write(&path, body).unwrap();
            (temp, path)
        }

        #[test]
        fn captures_stdout_and_stderr() {
            let (_temp, path) = script("echo out\necho err >&2\n");
            let result = ProcessRunner::new("sh").execute(&path);

            assert!(result.exit_succeeded);
            assert_eq!(result.exit_code, Some(0));
            assert_eq!(result.stdout, "out\n");
            assert_eq!(result.stderr, "err\n");
            assert!(result.failure.is_none());
        }

        #[test]
        fn non_zero_exit_carries_stderr() {
            let (_temp, path) = script("echo partial\necho broken >&2\nexit 4\n");
            let result = ProcessRunner::new("sh").execute(&path);

            assert!(!result.exit_succeeded);
            assert_eq!(result.exit_code, Some(4));
            assert_eq!(result.stdout, "partial\n");
            assert_eq!(result.failure_reason().as_deref(), Some("broken"));
        }

        #[test]
        fn silent_failure_reports_status() {
            let (_temp, path) = script("exit 1\n");
            let result = ProcessRunner::new("sh").execute(&path);
            assert_eq!(
                result.failure_reason().as_deref(),
                Some("exited with status 1")
            );
        }
    }
}
