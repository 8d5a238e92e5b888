//! Registry state: the ordered pending set and the phase it lives in.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;

/// Tombstones tolerated before a compaction is considered.
const MIN_COMPACT_TOMBSTONES: usize = 64;

/// Unique paths in first-insertion order.
///
/// Paths live in an append-only slot log; the index maps each live path to
/// its slot. Removal clears the slot in place, so insert, remove and lookup
/// are O(1) on average and survivors keep their relative order, which is the
/// (reversed) deletion order at drain time. The log is compacted once
/// tombstones outnumber live entries, keeping memory proportional to the
/// live set.
#[derive(Debug, Default)]
pub(crate) struct PendingPaths {
	slots: Vec<Option<Arc<Path>>>,
	index: FxHashMap<Arc<Path>, usize>,
}

impl PendingPaths {
	/// Inserts `path` if absent. Returns true when it was newly added.
	pub fn insert(&mut self, path: &Path) -> bool {
		if self.index.contains_key(path) {
			return false;
		}
		let path: Arc<Path> = Arc::from(path);
		self.index.insert(Arc::clone(&path), self.slots.len());
		self.slots.push(Some(path));
		true
	}

	/// Removes `path` if present. Returns true when something was removed.
	pub fn remove(&mut self, path: &Path) -> bool {
		let Some(slot) = self.index.remove(path) else {
			return false;
		};
		self.slots[slot] = None;
		self.maybe_compact();
		true
	}

	pub fn contains(&self, path: &Path) -> bool {
		self.index.contains_key(path)
	}

	pub fn len(&self) -> usize {
		self.index.len()
	}

	/// Iterates in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &Path> {
		self.slots.iter().flatten().map(|p| &**p)
	}

	/// Consumes the set, yielding paths last-inserted first.
	pub fn into_deletion_order(self) -> impl Iterator<Item = PathBuf> {
		self.slots.into_iter().rev().flatten().map(|p| p.to_path_buf())
	}

	fn maybe_compact(&mut self) {
		let tombstones = self.slots.len() - self.index.len();
		if tombstones < MIN_COMPACT_TOMBSTONES || tombstones <= self.index.len() {
			return;
		}
		self.slots.retain(Option::is_some);
		for (slot, path) in self.slots.iter().enumerate() {
			if let Some(path) = path
				&& let Some(entry) = self.index.get_mut(&**path)
			{
				*entry = slot;
			}
		}
	}

	#[cfg(test)]
	fn slot_count(&self) -> usize {
		self.slots.len()
	}
}

/// Lifecycle of a registry.
///
/// The pending set only exists while accepting, so mutating it after the
/// drain has begun cannot be expressed.
#[derive(Debug)]
pub(crate) enum Phase {
	Accepting(PendingPaths),
	Draining,
}

impl Default for Phase {
	fn default() -> Self {
		Self::Accepting(PendingPaths::default())
	}
}

impl Phase {
	/// Flips to [`Phase::Draining`] and hands back whatever was pending.
	///
	/// Returns `None` when the flip already happened.
	pub fn take_for_drain(&mut self) -> Option<PendingPaths> {
		match std::mem::replace(self, Self::Draining) {
			Self::Accepting(pending) => Some(pending),
			Self::Draining => None,
		}
	}

	pub const fn is_draining(&self) -> bool {
		matches!(self, Self::Draining)
	}

	pub fn pending(&self) -> Option<&PendingPaths> {
		match self {
			Self::Accepting(pending) => Some(pending),
			Self::Draining => None,
		}
	}

	pub fn pending_mut(&mut self) -> Option<&mut PendingPaths> {
		match self {
			Self::Accepting(pending) => Some(pending),
			Self::Draining => None,
		}
	}
}
