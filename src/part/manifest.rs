//! Part.toml manifest parsing and schema.
//!
//! The manifest is a small declaration of one part, read by the CLI driver.
//! The host packaging tool has its own part format and constructs the step
//! directly; the manifest only exists so the step can be driven standalone.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::step::StepOptions;

/// Canonical manifest file name.
pub const MANIFEST_NAME: &str = "Part.toml";

/// Top-level manifest schema.
#[derive(Debug, Clone, Deserialize)]
pub struct PartManifest {
    /// The [part] section
    pub part: PartSection,
}

/// The [part] section of a manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct PartSection {
    /// Part name
    pub name: String,

    /// Parallel job count override (>= 1)
    #[serde(default)]
    pub jobs: Option<usize>,

    /// Install root override
    #[serde(default, rename = "install-root")]
    pub install_root: Option<String>,

    /// Opaque step options, passed through to the build step
    #[serde(default)]
    pub options: toml::Table,
}

impl PartManifest {
    /// Parse a manifest from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        let manifest: PartManifest =
            toml::from_str(text).context("failed to parse part manifest")?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load a manifest from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid manifest {}", path.display()))
    }

    /// Validate manifest contents.
    fn validate(&self) -> Result<()> {
        if self.part.name.is_empty() {
            bail!("part name must not be empty");
        }
        if let Some(jobs) = self.part.jobs {
            if jobs == 0 {
                bail!("part.jobs must be at least 1");
            }
        }
        Ok(())
    }

    /// Step options declared in the [part.options] table.
    pub fn step_options(&self) -> StepOptions {
        StepOptions::from_table(self.part.options.clone())
    }
}
