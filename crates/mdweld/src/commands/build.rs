//! `mdweld build` command.

use std::path::PathBuf;

use clap::Args;

use super::{load_config, markdown_files, process_file, processor_for};
use crate::error::CliError;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to the config file (discovered in parent directories by default).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Summary of a completed build.
#[derive(Debug)]
pub(crate) struct BuildSummary {
    /// Number of documents written.
    pub documents: usize,
    /// Output directory.
    pub out_dir: PathBuf,
}

impl BuildArgs {
    /// Resolve includes for every markdown file and write the results.
    ///
    /// The directory structure under the source dir is mirrored into the
    /// output dir; non-markdown files are left alone.
    pub(crate) fn execute(&self) -> Result<BuildSummary, CliError> {
        let config = load_config(self.config.as_deref())?;
        let processor = processor_for(&config);

        let files = markdown_files(&config.source_dir)?;
        for path in &files {
            let output = process_file(&processor, path)?;

            let rel = path.strip_prefix(&config.source_dir).unwrap_or(path);
            let dest = config.out_dir.join(rel);
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&dest, output)?;
            tracing::info!(path = %path.display(), "processed");
        }

        Ok(BuildSummary {
            documents: files.len(),
            out_dir: config.out_dir,
        })
    }
}
