// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::CommitVersion;

/// Keeps every committed version of a catalog definition.
///
/// A `None` entry is a tombstone: the definition was dropped at that version.
#[derive(Debug)]
pub struct MultiVersionContainer<T: Clone> {
	versions: RwLock<BTreeMap<CommitVersion, Option<T>>>,
}

impl<T: Clone> Default for MultiVersionContainer<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Clone> MultiVersionContainer<T> {
	pub fn new() -> Self {
		Self {
			versions: RwLock::new(BTreeMap::new()),
		}
	}

	pub fn insert(&self, version: CommitVersion, value: T) {
		self.versions.write().insert(version, Some(value));
	}

	/// Record a tombstone at `version`
	pub fn remove(&self, version: CommitVersion) {
		self.versions.write().insert(version, None);
	}

	/// The value visible at `version`: the newest entry at or below it
	pub fn get(&self, version: CommitVersion) -> Option<T> {
		self.versions.read().range(..=version).next_back().and_then(|(_, value)| value.clone())
	}

	pub fn get_latest(&self) -> Option<T> {
		self.versions.read().values().next_back().and_then(|value| value.clone())
	}

	pub fn is_empty(&self) -> bool {
		self.versions.read().is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_at_version() {
		let multi = MultiVersionContainer::new();
		multi.insert(CommitVersion(2), "a");
		multi.insert(CommitVersion(5), "b");

		assert_eq!(multi.get(CommitVersion(1)), None);
		assert_eq!(multi.get(CommitVersion(2)), Some("a"));
		assert_eq!(multi.get(CommitVersion(4)), Some("a"));
		assert_eq!(multi.get(CommitVersion(5)), Some("b"));
		assert_eq!(multi.get(CommitVersion(100)), Some("b"));
	}

	#[test]
	fn test_tombstone_hides_later_reads() {
		let multi = MultiVersionContainer::new();
		multi.insert(CommitVersion(1), "a");
		multi.remove(CommitVersion(3));

		assert_eq!(multi.get(CommitVersion(2)), Some("a"));
		assert_eq!(multi.get(CommitVersion(3)), None);
		assert_eq!(multi.get_latest(), None);
		assert!(!multi.is_empty());
	}

	#[test]
	fn test_reinsert_after_tombstone() {
		let multi = MultiVersionContainer::new();
		multi.insert(CommitVersion(1), 10);
		multi.remove(CommitVersion(2));
		multi.insert(CommitVersion(3), 30);

		assert_eq!(multi.get(CommitVersion(2)), None);
		assert_eq!(multi.get_latest(), Some(30));
	}
}
