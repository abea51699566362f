// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cell::Cell;

use warden_catalog::Catalog;
use warden_core::interface::catalog::{RoleDef, RoleLookup};
use warden_type::{Diagnostic, Error};

/// A catalog seeded with the given roles
pub fn catalog_with_roles(names: &[&str]) -> Catalog {
	let catalog = Catalog::new();
	for name in names {
		catalog.create_role(name).unwrap();
	}
	catalog
}

/// A role lookup that knows no roles
pub struct EmptyCatalog;

impl RoleLookup for EmptyCatalog {
	fn find_role_by_name(&self, _name: &str) -> warden_type::Result<Option<RoleDef>> {
		Ok(None)
	}
}

/// A role lookup whose every read fails
pub struct UnavailableCatalog;

impl UnavailableCatalog {
	pub fn diagnostic() -> Diagnostic {
		Diagnostic {
			code: "TEST_CATALOG_UNAVAILABLE".to_string(),
			statement: None,
			message: "catalog unavailable".to_string(),
			label: None,
			help: None,
			notes: vec![],
			cause: None,
		}
	}
}

impl RoleLookup for UnavailableCatalog {
	fn find_role_by_name(&self, _name: &str) -> warden_type::Result<Option<RoleDef>> {
		Err(Error(Self::diagnostic()))
	}
}

/// Wraps a lookup and counts the reads made through it
pub struct CountingCatalog<L> {
	inner: L,
	lookups: Cell<usize>,
}

impl<L: RoleLookup> CountingCatalog<L> {
	pub fn new(inner: L) -> Self {
		Self {
			inner,
			lookups: Cell::new(0),
		}
	}

	pub fn lookups(&self) -> usize {
		self.lookups.get()
	}
}

impl<L: RoleLookup> RoleLookup for CountingCatalog<L> {
	fn find_role_by_name(&self, name: &str) -> warden_type::Result<Option<RoleDef>> {
		self.lookups.set(self.lookups.get() + 1);
		self.inner.find_role_by_name(name)
	}
}
