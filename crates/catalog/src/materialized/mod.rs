// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use crossbeam_skiplist::SkipMap;
use warden_core::{
	interface::catalog::{RoleDef, RoleId},
	util::MultiVersionContainer,
};

mod role;

pub type MultiVersionRoleDef = MultiVersionContainer<RoleDef>;
pub type MultiVersionRoleId = MultiVersionContainer<RoleId>;

/// Versioned role definitions kept in memory for lookups at any committed
/// version without touching storage.
#[derive(Clone)]
pub struct MaterializedCatalog(Arc<MaterializedCatalogInner>);

pub struct MaterializedCatalogInner {
	/// Versioned role definitions indexed by role ID
	pub(crate) roles: SkipMap<RoleId, MultiVersionRoleDef>,
	/// Versioned index from case-folded role name to role ID
	pub(crate) roles_by_name: SkipMap<String, MultiVersionRoleId>,
}

impl std::ops::Deref for MaterializedCatalog {
	type Target = MaterializedCatalogInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Default for MaterializedCatalog {
	fn default() -> Self {
		Self::new()
	}
}

impl MaterializedCatalog {
	pub fn new() -> Self {
		Self(Arc::new(MaterializedCatalogInner {
			roles: SkipMap::new(),
			roles_by_name: SkipMap::new(),
		}))
	}
}

/// Role names are compared case-insensitively
pub(crate) fn fold_name(name: &str) -> String {
	name.to_lowercase()
}
