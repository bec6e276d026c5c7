//! Path resolution for include directives.
//!
//! A directive's path token resolves either against the directory of the
//! including document, or against a configured project root when it starts
//! with the root alias prefix (default `@/`). Resolution is purely lexical:
//! `.` and `..` segments are collapsed without consulting the filesystem,
//! so missing files surface uniformly at the read step with a canonical
//! path in the error message.

use std::path::{Component, Path, PathBuf};

/// Default alias prefix for project-root includes.
pub const DEFAULT_ROOT_ALIAS: &str = "@/";

/// Immutable resolution configuration, fixed at pipeline construction.
#[derive(Debug, Clone)]
pub struct IncludeOptions {
    root_alias: String,
    root_dir: PathBuf,
}

impl IncludeOptions {
    /// Create options resolving the default `@/` alias against `root_dir`.
    #[must_use]
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_alias: DEFAULT_ROOT_ALIAS.to_owned(),
            root_dir: root_dir.into(),
        }
    }

    /// Override the alias prefix.
    #[must_use]
    pub fn root_alias(mut self, alias: impl Into<String>) -> Self {
        self.root_alias = alias.into();
        self
    }
}

/// Resolve a directive's path token to an absolute, normalized path.
///
/// Tokens starting with the alias prefix resolve against the configured
/// project root; everything else resolves against the directory containing
/// `document_path`. No existence check is performed.
#[must_use]
pub fn resolve(document_path: &Path, token: &str, options: &IncludeOptions) -> PathBuf {
    let joined = match token.strip_prefix(&options.root_alias) {
        Some(rest) => options.root_dir.join(rest),
        None => {
            let dir = document_path.parent().unwrap_or(Path::new(""));
            dir.join(token)
        }
    };
    normalize(&joined)
}

/// Collapse `.` and `..` segments lexically.
///
/// `..` above the filesystem root is dropped; above a relative start it is
/// kept, so the result stays deterministic without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(Component::ParentDir),
            },
            other => out.push(other),
        }
    }
    out
}
