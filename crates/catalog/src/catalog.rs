// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::{
	Arc,
	atomic::{AtomicU64, Ordering},
};

use parking_lot::Mutex;
use warden_core::CommitVersion;

use crate::materialized::MaterializedCatalog;

mod role;

/// Handle to the shared authorization policy.
///
/// Writers are serialized and each mutation commits a new version; readers
/// never block and see the newest committed version, or a pinned one through
/// [`CatalogSnapshot`].
#[derive(Clone)]
pub struct Catalog(Arc<CatalogInner>);

pub struct CatalogInner {
	materialized: MaterializedCatalog,
	version: AtomicU64,
	next_role_id: AtomicU64,
	writer: Mutex<()>,
}

impl Default for Catalog {
	fn default() -> Self {
		Self::new()
	}
}

impl Catalog {
	pub fn new() -> Self {
		Self(Arc::new(CatalogInner {
			materialized: MaterializedCatalog::new(),
			version: AtomicU64::new(0),
			next_role_id: AtomicU64::new(1),
			writer: Mutex::new(()),
		}))
	}

	pub fn materialized(&self) -> &MaterializedCatalog {
		&self.0.materialized
	}

	/// The newest committed version
	pub fn version(&self) -> CommitVersion {
		CommitVersion(self.0.version.load(Ordering::Acquire))
	}

	/// Pin the newest committed version for reads
	pub fn snapshot(&self) -> CatalogSnapshot {
		CatalogSnapshot {
			materialized: self.0.materialized.clone(),
			version: self.version(),
		}
	}

	/// Run `f` with the writer lock held and publish the version it wrote at
	fn commit<T>(&self, f: impl FnOnce(CommitVersion) -> crate::Result<T>) -> crate::Result<T> {
		let _guard = self.0.writer.lock();
		let current = self.version();
		let next = current.next();
		let result = f(next)?;
		self.0.version.store(next.0, Ordering::Release);
		Ok(result)
	}
}

/// Read-only view of the catalog at a fixed version
#[derive(Clone)]
pub struct CatalogSnapshot {
	materialized: MaterializedCatalog,
	version: CommitVersion,
}

impl CatalogSnapshot {
	pub fn version(&self) -> CommitVersion {
		self.version
	}
}
