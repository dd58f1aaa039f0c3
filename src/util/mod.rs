//! Shared utilities.

pub mod process;

pub use process::{
    find_executable, CommandRunner, ExternalCommandError, ProcessBuilder, SystemRunner,
};
