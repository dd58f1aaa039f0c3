//! Step context - directories and parallelism for one build invocation.

use std::path::PathBuf;

/// Context passed to build-step operations.
///
/// Owned by the host for the duration of a build; the step never mutates it.
#[derive(Debug, Clone)]
pub struct StepContext {
    /// Part name this step builds
    pub part_name: String,

    /// Directory holding the part's pulled sources
    pub source_dir: PathBuf,

    /// Directory the build runs in
    pub build_dir: PathBuf,

    /// Root directory the install phase populates
    pub install_root: PathBuf,

    /// Parallel job count requested of the build tool (>= 1)
    pub parallel_jobs: usize,
}

impl StepContext {
    /// Create a new step context with a single job.
    pub fn new(
        part_name: impl Into<String>,
        source_dir: PathBuf,
        build_dir: PathBuf,
        install_root: PathBuf,
    ) -> Self {
        StepContext {
            part_name: part_name.into(),
            source_dir,
            build_dir,
            install_root,
            parallel_jobs: 1,
        }
    }

    /// Set the parallel job count.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.parallel_jobs = jobs.max(1);
        self
    }

    /// Whether the build runs directly in the source tree.
    pub fn in_source(&self) -> bool {
        self.source_dir == self.build_dir
    }
}
