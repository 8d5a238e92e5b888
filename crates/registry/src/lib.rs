//! Delete-on-exit registry with cancellable entries.
//!
//! Paths registered with [`ExitDeletionRegistry::register`] are deleted,
//! newest first, when the registry is drained at process exit. Unlike an
//! append-only list, entries can be dropped again with
//! [`ExitDeletionRegistry::deregister`], so long-running processes that clean
//! up their own temporary files do not accumulate stale entries.
//!
//! Most callers want the process-wide handle in [`global`]:
//!
//! ```no_run
//! let path = std::env::temp_dir().join("scratch.bin");
//! std::fs::write(&path, b"...")?;
//! sweep_registry::global::delete_on_exit(&path)?;
//!
//! // Done early; delete now and stop tracking it.
//! std::fs::remove_file(&path)?;
//! sweep_registry::global::cancel_delete_on_exit(&path);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// File-delete primitive used by the drain.
pub mod delete;
/// Registry error types.
pub mod error;
/// Process-wide handle wired to the exit hook.
pub mod global;
/// Termination notification.
pub mod hook;
mod pending;
/// The registry itself.
pub mod registry;
/// Per-path drain diagnostics.
pub mod report;

pub use delete::{Deleter, FsDeleter};
pub use error::{RegistryError, Result};
pub use hook::{AtExitHook, ExitCallback, TerminationHook};
pub use registry::ExitDeletionRegistry;
pub use report::{DeletionOutcome, DrainReport};
