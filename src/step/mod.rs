//! Build-step abstraction and the qmake step itself.
//!
//! A build step translates a declarative build request into an ordered
//! sequence of external command invocations. The host packaging tool
//! constructs the step (which registers the tool packages it needs), then
//! invokes `build()` exactly once.
//!
//! # Key Concepts
//!
//! - **BuildStep** - host-facing lifecycle trait (in `trait_def.rs`)
//! - **StepOptions** - opaque per-part configuration (in `options.rs`)
//! - **Preparation** - collaborator run before the step's own commands
//!   (in `prepare.rs`)
//! - **QmakeStep** - the qmake/make adapter (in `qmake.rs`)

pub mod options;
pub mod prepare;
pub mod qmake;
pub mod trait_def;

pub use options::StepOptions;
pub use prepare::{NoPreparation, Preparation, SourceStaging};
pub use qmake::QmakeStep;
pub use trait_def::BuildStep;
