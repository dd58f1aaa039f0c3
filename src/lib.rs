//! qmake-step - a qmake build step for parts-based package builds
//!
//! This crate provides the build-step adapter a parts-based packaging tool
//! invokes to build a Qt part: it registers its build-time package
//! requirements at construction and, on `build()`, stages sources and runs
//! `qmake` and `make` in strict sequence.

pub mod part;
pub mod step;
pub mod util;

/// Test utilities and mocks for qmake-step unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a recording command runner and context
/// fixtures so step behavior can be asserted without spawning processes.
#[cfg(test)]
pub mod test_support;

pub use part::{context::StepContext, manifest::PartManifest, packages::BuildPackages};
pub use step::{
    prepare::{Preparation, SourceStaging},
    qmake::QmakeStep,
    BuildStep, StepOptions,
};
pub use util::process::{CommandRunner, ExternalCommandError, ProcessBuilder, SystemRunner};
