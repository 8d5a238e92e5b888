//! Delete-on-exit registry.
//!
//! Application threads [`register`](ExitDeletionRegistry::register) paths and
//! [`deregister`](ExitDeletionRegistry::deregister) them once they delete the
//! file themselves. The termination hook calls
//! [`drain`](ExitDeletionRegistry::drain) once, which flips the registry into
//! its terminal phase and deletes whatever was still pending, newest first.
//!
//! All three operations share one lock. The lock covers only the in-memory
//! set; filesystem I/O in the drain happens after it is released, on the
//! snapshot taken together with the phase flip.

use std::fmt;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::delete::{Deleter, FsDeleter};
use crate::error::{RegistryError, Result};
use crate::pending::Phase;
use crate::report::DrainReport;

/// Registry of paths to delete when the process exits.
pub struct ExitDeletionRegistry {
	state: Mutex<Phase>,
	deleter: Box<dyn Deleter>,
}

impl Default for ExitDeletionRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for ExitDeletionRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ExitDeletionRegistry").field("state", &*self.state.lock()).finish_non_exhaustive()
	}
}

impl ExitDeletionRegistry {
	/// Creates an accepting registry that deletes through [`FsDeleter`].
	pub fn new() -> Self {
		Self::with_deleter(FsDeleter)
	}

	/// Creates an accepting registry with a custom delete primitive.
	pub fn with_deleter(deleter: impl Deleter + 'static) -> Self {
		Self {
			state: Mutex::new(Phase::default()),
			deleter: Box::new(deleter),
		}
	}

	/// Schedules `path` for deletion at exit.
	///
	/// Any permission check for deleting `path` is the caller's job and must
	/// happen before this call. Registering a present path is a no-op and
	/// keeps its original position.
	///
	/// Paths containing a NUL byte cannot name a file and are accepted
	/// without being tracked.
	///
	/// # Errors
	///
	/// [`RegistryError::ShutdownInProgress`] once [`drain`](Self::drain) has
	/// begun; the path is not recorded and the caller must clean it up itself.
	pub fn register(&self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		if contains_nul(path) {
			tracing::trace!(path = %path.display(), "skipping path with NUL byte");
			return Ok(());
		}

		let mut state = self.state.lock();
		let Some(pending) = state.pending_mut() else {
			drop(state);
			tracing::debug!(path = %path.display(), "delete-on-exit rejected, drain already started");
			return Err(RegistryError::ShutdownInProgress);
		};
		if pending.insert(path) {
			tracing::trace!(path = %path.display(), pending = pending.len(), "registered for delete-on-exit");
		}
		Ok(())
	}

	/// Cancels a pending deletion of `path`.
	///
	/// Never fails: absent paths and calls after the drain began are no-ops.
	/// Callers that delete a registered file themselves should call this so
	/// the entry does not linger until exit.
	pub fn deregister(&self, path: impl AsRef<Path>) {
		let path = path.as_ref();
		let mut state = self.state.lock();
		if let Some(pending) = state.pending_mut()
			&& pending.remove(path)
		{
			tracing::trace!(path = %path.display(), pending = pending.len(), "deregistered from delete-on-exit");
		}
	}

	/// Stops accepting registrations and deletes every pending path.
	///
	/// Paths are deleted in reverse registration order. Individual failures
	/// are logged and recorded in the returned report, never propagated. Only
	/// the first call does any work; later calls return an empty report.
	pub fn drain(&self) -> DrainReport {
		let Some(pending) = self.state.lock().take_for_drain() else {
			return DrainReport::default();
		};

		let mut report = DrainReport::with_capacity(pending.len());
		tracing::debug!(count = pending.len(), "draining delete-on-exit registry");
		for path in pending.into_deletion_order() {
			let result = self.deleter.delete(&path);
			if let Err(error) = &result {
				tracing::debug!(path = %path.display(), %error, "delete-on-exit failed");
			}
			report.record(path, result);
		}
		report
	}

	/// Number of paths waiting for deletion. Zero once draining.
	pub fn len(&self) -> usize {
		self.state.lock().pending().map_or(0, |p| p.len())
	}

	/// True when nothing is pending.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns true when `path` is pending.
	pub fn contains(&self, path: impl AsRef<Path>) -> bool {
		self.state.lock().pending().is_some_and(|p| p.contains(path.as_ref()))
	}

	/// Snapshot of pending paths in registration order.
	pub fn pending(&self) -> Vec<PathBuf> {
		self.state.lock().pending().map(|p| p.iter().map(Path::to_path_buf).collect()).unwrap_or_default()
	}

	/// Returns true once [`drain`](Self::drain) has begun.
	pub fn is_draining(&self) -> bool {
		self.state.lock().is_draining()
	}
}

fn contains_nul(path: &Path) -> bool {
	path.as_os_str().as_encoded_bytes().contains(&0)
}
