//! `qmake-step packages` command

use anyhow::Result;

use crate::cli::PackagesArgs;
use qmake_step::QmakeStep;

/// Print the build packages, one per line, for the host dependency
/// resolver to consume.
pub fn execute(_args: PackagesArgs) -> Result<()> {
    for package in QmakeStep::build_packages() {
        println!("{}", package);
    }

    Ok(())
}
