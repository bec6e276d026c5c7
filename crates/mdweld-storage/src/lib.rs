//! Content source abstraction for include resolution.
//!
//! Provides the [`ContentSource`] trait, the injected file-read primitive
//! used by the include engine. Injecting the read keeps the engine a pure
//! function of (document, configuration, file contents) and lets tests run
//! against in-memory fixtures instead of the real filesystem.
//!
//! Backends:
//! - [`FsSource`]: reads from the local filesystem.
//! - [`MemorySource`] (feature `mock`): in-memory fixture store for tests.

mod fs;
#[cfg(any(test, feature = "mock"))]
mod memory;
mod source;

pub use fs::FsSource;
#[cfg(any(test, feature = "mock"))]
pub use memory::MemorySource;
pub use source::{ContentSource, SourceError};
