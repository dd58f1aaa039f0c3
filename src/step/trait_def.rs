//! BuildStep trait definition.
//!
//! The BuildStep trait defines the interface the host packaging tool drives.
//! Registration of build packages happens at construction time, against the
//! handle the host passes in; the trait itself is purely operational.

use anyhow::Result;

use crate::part::StepContext;

/// A build step the host invokes for one part.
pub trait BuildStep {
    /// Name of the part this step builds.
    fn name(&self) -> &str;

    /// Run the step: preparation first, then the step's own commands,
    /// strictly in sequence. The first failure aborts the operation.
    fn build(&self, ctx: &StepContext) -> Result<()>;
}
