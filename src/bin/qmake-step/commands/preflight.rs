//! `qmake-step preflight` command

use anyhow::{bail, Result};

use crate::cli::PreflightArgs;
use qmake_step::util::process::find_executable;
use qmake_step::QmakeStep;

pub fn execute(_args: PreflightArgs) -> Result<()> {
    let mut missing = Vec::new();

    for (tool, package) in QmakeStep::required_tools() {
        match find_executable(tool) {
            Some(path) => eprintln!("       Found {} ({})", tool, path.display()),
            None => {
                eprintln!("     Missing {} (install the {} package)", tool, package);
                missing.push(*tool);
            }
        }
    }

    if !missing.is_empty() {
        bail!("missing build tools: {}", missing.join(", "));
    }

    Ok(())
}
