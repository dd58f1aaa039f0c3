//! qmake build step - wraps qmake/make builds.
//!
//! This step provides the BuildStep interface for qmake projects: generate
//! a Makefile, compile, install under the part's install root.

use anyhow::Result;

use crate::part::{BuildPackages, StepContext};
use crate::step::options::StepOptions;
use crate::step::prepare::Preparation;
use crate::step::trait_def::BuildStep;
use crate::util::process::{CommandRunner, ExternalCommandError, ProcessBuilder};

/// Qt toolkit selector passed to every qmake invocation.
const QT_SELECTOR: &str = "-qt5";

/// Tool packages the host must install before `build()` runs.
const BUILD_PACKAGES: [&str; 2] = ["qt5-qmake", "make"];

/// Executables the step invokes, paired with the package providing each.
const REQUIRED_TOOLS: [(&str, &str); 2] = [("qmake", "qt5-qmake"), ("make", "make")];

/// qmake build step.
///
/// Construction registers the step's build packages against the handle the
/// host passes in; `build()` runs preparation followed by three commands in
/// strict sequence.
pub struct QmakeStep {
    name: String,
    options: StepOptions,
    prepare: Box<dyn Preparation>,
    runner: Box<dyn CommandRunner>,
}

impl QmakeStep {
    /// Create a new qmake step for a part.
    pub fn new(
        name: impl Into<String>,
        options: StepOptions,
        prepare: Box<dyn Preparation>,
        runner: Box<dyn CommandRunner>,
        packages: &mut BuildPackages,
    ) -> Self {
        packages.register_all(BUILD_PACKAGES);

        QmakeStep {
            name: name.into(),
            options,
            prepare,
            runner,
        }
    }

    /// Tool packages this step registers.
    pub fn build_packages() -> &'static [&'static str] {
        &BUILD_PACKAGES
    }

    /// Executables the step invokes, paired with the package providing
    /// each. Used by preflight checks.
    pub fn required_tools() -> &'static [(&'static str, &'static str)] {
        &REQUIRED_TOOLS
    }

    /// Build the qmake argument list.
    fn qmake_args(&self) -> Vec<String> {
        let mut args = vec![QT_SELECTOR.to_string()];

        // Explicit project file, if the part names one
        if let Some(project) = self.options.get_string("project_file") {
            args.push(project.to_string());
        }

        // Part-declared extras come after the selector
        args.extend(self.options.get_string_array("qmake_args"));

        args
    }

    /// Run one command, mapping unsuccessful exits to ExternalCommandError.
    fn run(&self, cmd: &ProcessBuilder) -> Result<()> {
        tracing::debug!("{}: {}", self.name, cmd.display_command());

        let code = self.runner.status(cmd)?;
        if code != Some(0) {
            return Err(ExternalCommandError {
                command: cmd.display_command(),
                code,
            }
            .into());
        }

        Ok(())
    }
}

impl BuildStep for QmakeStep {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self, ctx: &StepContext) -> Result<()> {
        self.prepare.prepare(ctx)?;

        // Run qmake to generate a Makefile
        self.run(
            &ProcessBuilder::new("qmake")
                .args(self.qmake_args())
                .cwd(&ctx.build_dir),
        )?;

        // Run make to build the sources
        self.run(
            &ProcessBuilder::new("make")
                .arg(format!("-j{}", ctx.parallel_jobs))
                .cwd(&ctx.build_dir),
        )?;

        // Now install it
        self.run(
            &ProcessBuilder::new("make")
                .arg("install")
                .arg(format!("INSTALL_ROOT={}", ctx.install_root.display()))
                .cwd(&ctx.build_dir),
        )?;

        Ok(())
    }
}
