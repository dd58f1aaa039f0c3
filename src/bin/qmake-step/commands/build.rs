//! `qmake-step build` command

use anyhow::{bail, Result};

use crate::cli::BuildArgs;
use qmake_step::part::manifest::MANIFEST_NAME;
use qmake_step::{
    BuildPackages, BuildStep, PartManifest, QmakeStep, SourceStaging, StepContext, StepOptions,
    SystemRunner,
};

pub fn execute(args: BuildArgs) -> Result<()> {
    // Explicit manifest, or Part.toml next to the sources
    let manifest = match &args.manifest {
        Some(path) => Some(PartManifest::load(path)?),
        None => {
            let default = args.source_dir.join(MANIFEST_NAME);
            if default.exists() {
                Some(PartManifest::load(&default)?)
            } else {
                None
            }
        }
    };

    let name = args
        .name
        .or_else(|| manifest.as_ref().map(|m| m.part.name.clone()))
        .or_else(|| {
            args.source_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "part".to_string());

    let install_root = match args.installdir.or_else(|| {
        manifest
            .as_ref()
            .and_then(|m| m.part.install_root.as_ref())
            .map(Into::into)
    }) {
        Some(dir) => dir,
        None => bail!(
            "an install root is required; pass --installdir or set \
             install-root in {}",
            MANIFEST_NAME
        ),
    };

    let jobs = match args
        .jobs
        .or_else(|| manifest.as_ref().and_then(|m| m.part.jobs))
    {
        Some(0) => bail!("--jobs must be at least 1"),
        Some(jobs) => jobs,
        None => std::thread::available_parallelism().map_or(1, |n| n.get()),
    };

    let options = manifest
        .as_ref()
        .map(|m| m.step_options())
        .unwrap_or_else(StepOptions::new);

    let build_dir = args.build_dir.unwrap_or_else(|| args.source_dir.clone());
    let ctx = StepContext::new(&name, args.source_dir, build_dir, install_root).with_jobs(jobs);

    let mut packages = BuildPackages::new();
    let step = QmakeStep::new(
        &name,
        options,
        Box::new(SourceStaging),
        Box::new(SystemRunner),
        &mut packages,
    );

    eprintln!("    Building {}", step.name());
    step.build(&ctx)?;
    eprintln!("    Finished {}", step.name());

    Ok(())
}
