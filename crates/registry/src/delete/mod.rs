//! File-delete primitive used by the drain.

use std::io;
use std::path::Path;

/// Deletes a single path on behalf of the drain.
///
/// Implementations must not panic; errors are recorded and otherwise ignored.
pub trait Deleter: Send + Sync {
	/// Attempts to delete `path`.
	fn delete(&self, path: &Path) -> io::Result<()>;
}

impl<F> Deleter for F
where
	F: Fn(&Path) -> io::Result<()> + Send + Sync,
{
	fn delete(&self, path: &Path) -> io::Result<()> {
		self(path)
	}
}

/// Deletes a file, symlink or empty directory from the local filesystem.
///
/// Symlinks are removed themselves, never followed. Non-empty directories
/// are left alone and reported as a failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDeleter;

impl Deleter for FsDeleter {
	fn delete(&self, path: &Path) -> io::Result<()> {
		if std::fs::symlink_metadata(path)?.is_dir() {
			std::fs::remove_dir(path)
		} else {
			std::fs::remove_file(path)
		}
	}
}

#[cfg(test)]
mod tests;
