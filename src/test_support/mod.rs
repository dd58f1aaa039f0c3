//! Test utilities and mocks for qmake-step unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use qmake_step::test_support::RecordingRunner;
//!
//! #[test]
//! fn test_example() {
//!     let runner = RecordingRunner::new();
//!     runner.fail_with("make -j2", Some(2));
//!
//!     // Run the step with Box::new(runner.clone()), then assert on
//!     // runner.commands()
//! }
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::part::StepContext;
use crate::util::process::{CommandRunner, ProcessBuilder};

/// Command runner that records invocations instead of spawning.
///
/// Every command succeeds unless scripted otherwise. Clones share state,
/// so a test can keep a handle while the step owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    commands: Arc<Mutex<Vec<RecordedCommand>>>,
    scripted: Arc<Mutex<HashMap<String, Option<i32>>>>,
}

/// A single recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    /// Rendered command line
    pub command: String,
    /// Working directory the command was launched with
    pub cwd: Option<PathBuf>,
}

impl RecordingRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        RecordingRunner::default()
    }

    /// Script an exit status for a command line. `None` simulates a child
    /// killed by a signal.
    pub fn fail_with(&self, command: &str, code: Option<i32>) {
        self.scripted
            .lock()
            .unwrap()
            .insert(command.to_string(), code);
    }

    /// Rendered command lines, in invocation order.
    pub fn commands(&self) -> Vec<String> {
        self.commands
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.command.clone())
            .collect()
    }

    /// Full invocation records, in order.
    pub fn recorded(&self) -> Vec<RecordedCommand> {
        self.commands.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn status(&self, cmd: &ProcessBuilder) -> Result<Option<i32>> {
        let command = cmd.display_command();
        self.commands.lock().unwrap().push(RecordedCommand {
            command: command.clone(),
            cwd: cmd.get_cwd().map(|p| p.to_path_buf()),
        });

        match self.scripted.lock().unwrap().get(&command) {
            Some(code) => Ok(*code),
            None => Ok(Some(0)),
        }
    }
}

/// A step context rooted under fixed paths, for sequence assertions.
pub fn step_context(jobs: usize, install_root: &str) -> StepContext {
    StepContext::new(
        "qds",
        PathBuf::from("/parts/qds/src"),
        PathBuf::from("/parts/qds/build"),
        PathBuf::from(install_root),
    )
    .with_jobs(jobs)
}
