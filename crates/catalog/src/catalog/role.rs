// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::atomic::Ordering;

use tracing::{debug, instrument};
use warden_core::interface::catalog::{RoleDef, RoleId, RoleLookup};

use crate::{
	Catalog, CatalogSnapshot,
	error::{CatalogError, CatalogObjectKind},
};

impl Catalog {
	#[instrument(name = "catalog::role::find_by_name", level = "trace", skip(self))]
	pub fn find_role_by_name(&self, name: &str) -> Option<RoleDef> {
		self.materialized().find_role_by_name_at(name, self.version())
	}

	pub fn list_roles(&self) -> Vec<RoleDef> {
		self.materialized().list_roles_at(self.version())
	}

	#[instrument(name = "catalog::role::create", level = "debug", skip(self))]
	pub fn create_role(&self, name: &str) -> crate::Result<RoleDef> {
		self.commit(|version| {
			if self.materialized().find_role_by_name_at(name, version).is_some() {
				return Err(CatalogError::AlreadyExists {
					kind: CatalogObjectKind::Role,
					name: name.to_string(),
				}
				.into());
			}

			let id = RoleId(self.0.next_role_id.fetch_add(1, Ordering::Relaxed));
			let role = RoleDef {
				id,
				name: name.to_string(),
				grant_groups: vec![],
			};
			self.materialized().set_role(id, version, Some(role.clone()));
			debug!(role = %role.name, id = %id, version = %version, "role created");
			Ok(role)
		})
	}

	#[instrument(name = "catalog::role::drop", level = "debug", skip(self))]
	pub fn drop_role(&self, name: &str) -> crate::Result<RoleDef> {
		self.commit(|version| {
			let role = self.get_role_at(name, version)?;
			self.materialized().set_role(role.id, version, None);
			debug!(role = %role.name, id = %role.id, version = %version, "role dropped");
			Ok(role)
		})
	}

	#[instrument(name = "catalog::role::grant_group", level = "debug", skip(self))]
	pub fn grant_group(&self, role: &str, group: &str) -> crate::Result<RoleDef> {
		self.commit(|version| {
			let mut def = self.get_role_at(role, version)?;
			if def.is_granted_to(group) {
				return Err(CatalogError::GroupAlreadyGranted {
					role: def.name,
					group: group.to_string(),
				}
				.into());
			}
			def.grant_groups.push(group.to_string());
			self.materialized().set_role(def.id, version, Some(def.clone()));
			Ok(def)
		})
	}

	#[instrument(name = "catalog::role::revoke_group", level = "debug", skip(self))]
	pub fn revoke_group(&self, role: &str, group: &str) -> crate::Result<RoleDef> {
		self.commit(|version| {
			let mut def = self.get_role_at(role, version)?;
			if !def.is_granted_to(group) {
				return Err(CatalogError::GroupNotGranted {
					role: def.name,
					group: group.to_string(),
				}
				.into());
			}
			def.grant_groups.retain(|g| g != group);
			self.materialized().set_role(def.id, version, Some(def.clone()));
			Ok(def)
		})
	}

	/// Reads inside a commit see the previous version; nothing is written at
	/// `version` yet.
	fn get_role_at(&self, name: &str, version: warden_core::CommitVersion) -> crate::Result<RoleDef> {
		self.materialized().find_role_by_name_at(name, version).ok_or_else(|| {
			CatalogError::NotFound {
				kind: CatalogObjectKind::Role,
				name: name.to_string(),
			}
			.into()
		})
	}
}

impl RoleLookup for Catalog {
	fn find_role_by_name(&self, name: &str) -> crate::Result<Option<RoleDef>> {
		Ok(Catalog::find_role_by_name(self, name))
	}
}

impl CatalogSnapshot {
	#[instrument(name = "catalog::snapshot::find_by_name", level = "trace", skip(self), fields(version = %self.version()))]
	pub fn find_role_by_name(&self, name: &str) -> Option<RoleDef> {
		self.materialized.find_role_by_name_at(name, self.version())
	}

	pub fn list_roles(&self) -> Vec<RoleDef> {
		self.materialized.list_roles_at(self.version())
	}
}

impl RoleLookup for CatalogSnapshot {
	fn find_role_by_name(&self, name: &str) -> crate::Result<Option<RoleDef>> {
		Ok(CatalogSnapshot::find_role_by_name(self, name))
	}
}

#[cfg(test)]
mod tests {
	use warden_core::CommitVersion;

	use super::*;

	#[test]
	fn test_create_role() {
		let catalog = Catalog::new();
		let role = catalog.create_role("analyst").unwrap();
		assert_eq!(role.id, RoleId(1));
		assert_eq!(role.name, "analyst");
		assert_eq!(catalog.version(), CommitVersion(1));
		assert_eq!(catalog.find_role_by_name("analyst"), Some(role));
	}

	#[test]
	fn test_create_duplicate_role() {
		let catalog = Catalog::new();
		catalog.create_role("analyst").unwrap();

		let err = catalog.create_role("ANALYST").unwrap_err();
		assert_eq!(err.code, "CA_001");
		assert_eq!(err.message, "Role 'ANALYST' already exists");
		assert_eq!(catalog.version(), CommitVersion(1));
	}

	#[test]
	fn test_drop_role() {
		let catalog = Catalog::new();
		catalog.create_role("analyst").unwrap();
		let dropped = catalog.drop_role("analyst").unwrap();

		assert_eq!(dropped.name, "analyst");
		assert_eq!(catalog.find_role_by_name("analyst"), None);
		assert!(catalog.list_roles().is_empty());
	}

	#[test]
	fn test_drop_missing_role() {
		let catalog = Catalog::new();
		let err = catalog.drop_role("ghost").unwrap_err();
		assert_eq!(err.code, "CA_002");
		assert_eq!(catalog.version(), CommitVersion(0));
	}

	#[test]
	fn test_grant_and_revoke_group() {
		let catalog = Catalog::new();
		catalog.create_role("analyst").unwrap();

		let granted = catalog.grant_group("analyst", "finance").unwrap();
		assert_eq!(granted.grant_groups, vec!["finance".to_string()]);
		assert_eq!(catalog.grant_group("analyst", "finance").unwrap_err().code, "CA_003");

		let revoked = catalog.revoke_group("analyst", "finance").unwrap();
		assert!(revoked.grant_groups.is_empty());
		assert_eq!(catalog.revoke_group("analyst", "finance").unwrap_err().code, "CA_004");
	}

	#[test]
	fn test_snapshot_is_point_in_time() {
		let catalog = Catalog::new();
		catalog.create_role("analyst").unwrap();

		let snapshot = catalog.snapshot();
		catalog.drop_role("analyst").unwrap();
		catalog.create_role("auditor").unwrap();

		assert!(snapshot.find_role_by_name("analyst").is_some());
		assert!(snapshot.find_role_by_name("auditor").is_none());
		assert_eq!(snapshot.list_roles().len(), 1);
		assert_eq!(catalog.snapshot().version(), CommitVersion(3));
	}

	#[test]
	fn test_role_lookup_trait() {
		let catalog = Catalog::new();
		catalog.create_role("Admin").unwrap();

		let lookup: &dyn RoleLookup = &catalog;
		assert_eq!(lookup.find_role_by_name("admin").unwrap().map(|r| r.name), Some("Admin".to_string()));
		assert_eq!(lookup.find_role_by_name("nobody").unwrap(), None);
	}
}
