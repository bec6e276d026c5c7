//! CLI subcommands and shared pipeline plumbing.

mod build;
mod check;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use mdweld_config::Config;
use mdweld_includes::{IncludeOptions, IncludeProcessor};
use mdweld_markdown::Document;

use crate::error::CliError;

/// Load configuration from an explicit path or by discovery from the
/// current directory.
fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(Config::discover(&cwd)?)
        }
    }
}

/// Build an include processor from the resolved configuration.
fn processor_for(config: &Config) -> IncludeProcessor {
    let options = IncludeOptions::new(&config.root_dir).root_alias(&config.root_alias);
    IncludeProcessor::new(options)
}

/// Collect all markdown files under the source directory.
///
/// Results are sorted so processing order (and the first error reported)
/// is deterministic.
fn markdown_files(source_dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    for entry in WalkBuilder::new(source_dir).build() {
        let entry = entry?;
        if entry.file_type().is_some_and(|t| t.is_file())
            && entry.path().extension().is_some_and(|ext| ext == "md")
        {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Process one document and return its substituted markdown.
fn process_file(processor: &IncludeProcessor, path: &Path) -> Result<String, CliError> {
    let source = std::fs::read_to_string(path)?;
    let mut document = Document::parse(path, &source);
    processor.process(&mut document)?;
    Ok(document.to_markdown())
}
