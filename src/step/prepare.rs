//! Build preparation - the collaborator that runs before a step's commands.
//!
//! The host owns how sources reach the build directory. A step holds a
//! `Preparation` and calls it at the start of `build()`; the default
//! `SourceStaging` copies the part's source tree into the build directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::part::StepContext;

/// Preparation invoked before a step's own commands.
pub trait Preparation {
    /// Prepare the build directory. A failure aborts the build before any
    /// command runs.
    fn prepare(&self, ctx: &StepContext) -> Result<()>;
}

/// Preparation that does nothing.
///
/// For hosts that stage sources themselves before invoking the step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPreparation;

impl Preparation for NoPreparation {
    fn prepare(&self, _ctx: &StepContext) -> Result<()> {
        Ok(())
    }
}

/// Preparation that copies the source tree into the build directory.
///
/// No-op for in-source builds. When the build directory is nested inside
/// the source tree, it is excluded from the copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceStaging;

impl Preparation for SourceStaging {
    fn prepare(&self, ctx: &StepContext) -> Result<()> {
        if ctx.in_source() {
            tracing::debug!("in-source build, skipping staging");
            return Ok(());
        }

        tracing::debug!(
            "staging {} -> {}",
            ctx.source_dir.display(),
            ctx.build_dir.display()
        );

        fs::create_dir_all(&ctx.build_dir)
            .with_context(|| format!("failed to create {}", ctx.build_dir.display()))?;

        for entry in WalkDir::new(&ctx.source_dir)
            .into_iter()
            .filter_entry(|e| !path_is_within(e.path(), &ctx.build_dir))
        {
            let entry = entry
                .with_context(|| format!("failed to walk {}", ctx.source_dir.display()))?;

            let relative = entry
                .path()
                .strip_prefix(&ctx.source_dir)
                .expect("walked path is under the source dir");
            if relative.as_os_str().is_empty() {
                continue;
            }

            let dest = ctx.build_dir.join(relative);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&dest)
                    .with_context(|| format!("failed to create {}", dest.display()))?;
            } else {
                fs::copy(entry.path(), &dest).with_context(|| {
                    format!(
                        "failed to copy {} to {}",
                        entry.path().display(),
                        dest.display()
                    )
                })?;
            }
        }

        Ok(())
    }
}

fn path_is_within(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}
