//! `mdweld check` command.

use std::path::PathBuf;

use clap::Args;

use super::{load_config, markdown_files, process_file, processor_for};
use crate::error::CliError;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to the config file (discovered in parent directories by default).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Summary of a completed check.
#[derive(Debug)]
pub(crate) struct CheckSummary {
    /// Number of documents validated.
    pub documents: usize,
}

impl CheckArgs {
    /// Resolve includes for every markdown file, discarding the output.
    ///
    /// Surfaces the same errors as a build without writing anything, so CI
    /// can validate a docs tree cheaply.
    pub(crate) fn execute(&self) -> Result<CheckSummary, CliError> {
        let config = load_config(self.config.as_deref())?;
        let processor = processor_for(&config);

        let files = markdown_files(&config.source_dir)?;
        for path in &files {
            process_file(&processor, path)?;
            tracing::info!(path = %path.display(), "checked");
        }

        Ok(CheckSummary {
            documents: files.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &std::path::Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_check_passes_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("mdweld.toml"), "");
        write(&dir.path().join("docs/x.md"), "included");
        write(
            &dir.path().join("docs/page.md"),
            "```md\n{{#include ./x.md}}\n```\n",
        );

        let args = CheckArgs {
            config: Some(dir.path().join("mdweld.toml")),
            verbose: false,
        };
        let summary = args.execute().unwrap();

        assert_eq!(summary.documents, 2);
        assert!(!dir.path().join("build").exists());
    }

    #[test]
    fn test_check_reports_bad_anchor() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("mdweld.toml"), "");
        write(&dir.path().join("docs/x.md"), "no anchors here");
        write(
            &dir.path().join("docs/page.md"),
            "```md\n{{#include ./x.md:setup}}\n```\n",
        );

        let args = CheckArgs {
            config: Some(dir.path().join("mdweld.toml")),
            verbose: false,
        };
        let err = args.execute().unwrap_err();

        assert!(err.to_string().contains("Anchor 'setup' not found"));
    }
}
