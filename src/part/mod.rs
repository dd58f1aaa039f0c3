//! Part-level data for a single build invocation.
//!
//! This module contains the types the host packaging tool hands to a build
//! step:
//! - The step context (directories and parallelism)
//! - The build-package set the step appends its requirements to
//! - The part manifest the CLI driver reads

pub mod context;
pub mod manifest;
pub mod packages;

pub use context::StepContext;
pub use manifest::{PartManifest, MANIFEST_NAME};
pub use packages::BuildPackages;
