//! Per-path diagnostics collected while draining.

use std::io;
use std::path::{Path, PathBuf};

/// Result of one deletion attempt.
#[derive(Debug)]
pub struct DeletionOutcome {
	/// Path handed to the deleter.
	pub path: PathBuf,
	/// What the deleter returned.
	pub result: io::Result<()>,
}

impl DeletionOutcome {
	/// Returns true when the path was deleted.
	pub fn is_success(&self) -> bool {
		self.result.is_ok()
	}
}

/// Everything a drain attempted, in deletion order.
///
/// A drain never fails as a whole; this report is the only place individual
/// failures show up.
#[derive(Debug, Default)]
pub struct DrainReport {
	outcomes: Vec<DeletionOutcome>,
}

impl DrainReport {
	pub(crate) fn with_capacity(capacity: usize) -> Self {
		Self {
			outcomes: Vec::with_capacity(capacity),
		}
	}

	pub(crate) fn record(&mut self, path: PathBuf, result: io::Result<()>) {
		self.outcomes.push(DeletionOutcome { path, result });
	}

	/// All outcomes, last-registered path first.
	pub fn outcomes(&self) -> &[DeletionOutcome] {
		&self.outcomes
	}

	/// Paths in the order they were attempted.
	pub fn attempted(&self) -> impl Iterator<Item = &Path> {
		self.outcomes.iter().map(|o| o.path.as_path())
	}

	/// Number of paths actually deleted.
	pub fn deleted(&self) -> usize {
		self.outcomes.iter().filter(|o| o.is_success()).count()
	}

	/// Outcomes whose deletion failed.
	pub fn failed(&self) -> impl Iterator<Item = &DeletionOutcome> {
		self.outcomes.iter().filter(|o| !o.is_success())
	}

	/// True when nothing was attempted, e.g. on a repeated drain.
	pub fn is_empty(&self) -> bool {
		self.outcomes.is_empty()
	}
}
