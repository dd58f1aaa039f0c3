//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// qmake-step - a qmake build step for parts-based package builds
#[derive(Parser)]
#[command(name = "qmake-step")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the build step: stage sources, qmake, make, make install
    Build(BuildArgs),

    /// Check that the required build tools are on PATH
    Preflight(PreflightArgs),

    /// Print the build packages the step registers
    Packages(PackagesArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Part manifest to read (defaults to Part.toml in the source
    /// directory, when present)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Part name (defaults to the manifest name or the source directory
    /// name)
    #[arg(long)]
    pub name: Option<String>,

    /// Directory holding the part's sources
    #[arg(long, default_value = ".")]
    pub source_dir: PathBuf,

    /// Directory to build in; sources are staged into it when it differs
    /// from the source directory
    #[arg(long)]
    pub build_dir: Option<PathBuf>,

    /// Root directory the install phase populates
    #[arg(long, env = "QMAKE_STEP_INSTALLDIR")]
    pub installdir: Option<PathBuf>,

    /// Parallel job count passed to make
    #[arg(short, long, env = "QMAKE_STEP_JOBS")]
    pub jobs: Option<usize>,
}

#[derive(Args)]
pub struct PreflightArgs {}

#[derive(Args)]
pub struct PackagesArgs {}
