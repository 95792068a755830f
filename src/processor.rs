//! Generation driver.
//! Walks the manifest, asks the excluder about every entry and materializes
//! the included ones in the project folder.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::exclusion::Excluder;
use crate::manifest::{ManifestEntry, RenderMode};
use crate::renderer::TemplateRenderer;

/// What to do with one manifest entry.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOperation {
    /// Copy the template file unchanged.
    Copy { source: PathBuf, target: PathBuf },
    /// Write rendered content.
    Write { target: PathBuf, content: String },
    /// Leave the file out; `pattern` is the exclusion that matched.
    Exclude { pattern: String },
}

/// Files produced and skipped by one run, in manifest order.
#[derive(Debug, Default)]
pub struct GenerationSummary {
    pub written: Vec<PathBuf>,
    pub excluded: Vec<&'static str>,
}

pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    excluder: &'a Excluder,
    template_root: &'a Path,
    output_root: &'a Path,
    context: &'a serde_json::Value,
}

impl<'a> Processor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        excluder: &'a Excluder,
        template_root: &'a Path,
        output_root: &'a Path,
        context: &'a serde_json::Value,
    ) -> Self {
        Self { engine, excluder, template_root, output_root, context }
    }

    /// Decides the operation for `entry` without touching the output folder.
    ///
    /// # Errors
    /// * `Error::PathError` if the destination cannot be normalized
    /// * `Error::TemplateMissingError` if the template file does not exist
    /// * `Error::MinijinjaError` if rendering fails
    pub fn process(&self, entry: &ManifestEntry) -> Result<FileOperation> {
        if let Some(pattern) = self.excluder.matching_pattern(entry.destination)? {
            return Ok(FileOperation::Exclude { pattern: pattern.to_string() });
        }

        let source = self.template_root.join(entry.source);
        if !source.is_file() {
            return Err(Error::TemplateMissingError { template: entry.source.to_string() });
        }
        let target = self.output_root.join(entry.destination);

        match entry.mode {
            RenderMode::CopyVerbatim => {
                debug!("Copying file: {}", target.display());
                Ok(FileOperation::Copy { source, target })
            }
            RenderMode::RenderWithContext => {
                debug!("Rendering file: {}", target.display());
                let template = fs::read_to_string(&source)?;
                let content = self.engine.render(&template, self.context)?;
                Ok(FileOperation::Write { target, content })
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).map_err(Error::IoError)
}

fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, dest).map(|_| ()).map_err(Error::IoError)
}

/// Processes every entry of `manifest` in order.
///
/// Stops at the first error; files written before it stay on disk.
pub fn generate(processor: &Processor<'_>, manifest: &'static [ManifestEntry]) -> Result<GenerationSummary> {
    let mut summary = GenerationSummary::default();

    for entry in manifest {
        match processor.process(entry)? {
            FileOperation::Exclude { pattern } => {
                debug!("Skipping '{}' excluded by '{}'", entry.destination, pattern);
                println!("Excluded: '{}'", entry.destination);
                summary.excluded.push(entry.destination);
            }
            FileOperation::Copy { source, target } => {
                copy_file(&source, &target)?;
                println!("Created: '{}'", entry.destination);
                summary.written.push(target);
            }
            FileOperation::Write { target, content } => {
                write_file(&target, &content)?;
                println!("Created: '{}'", entry.destination);
                summary.written.push(target);
            }
        }
    }

    Ok(summary)
}
