// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use warden_core::{
	CommitVersion,
	interface::catalog::{RoleDef, RoleId},
};

use crate::materialized::{MaterializedCatalog, MultiVersionRoleDef, MultiVersionRoleId, fold_name};

impl MaterializedCatalog {
	/// Find a role by ID at a specific version
	pub fn find_role_at(&self, role: RoleId, version: CommitVersion) -> Option<RoleDef> {
		self.roles.get(&role).and_then(|entry| {
			let multi = entry.value();
			multi.get(version)
		})
	}

	/// Find a role by name at a specific version
	pub fn find_role_by_name_at(&self, name: &str, version: CommitVersion) -> Option<RoleDef> {
		self.roles_by_name.get(&fold_name(name)).and_then(|entry| {
			let role_id = entry.value().get(version)?;
			self.find_role_at(role_id, version)
		})
	}

	/// All roles visible at `version`, ordered by ID
	pub fn list_roles_at(&self, version: CommitVersion) -> Vec<RoleDef> {
		self.roles.iter().filter_map(|entry| entry.value().get(version)).collect()
	}

	pub fn set_role(&self, id: RoleId, version: CommitVersion, role: Option<RoleDef>) {
		if let Some(entry) = self.roles.get(&id) {
			if let Some(pre) = entry.value().get_latest() {
				let by_name = self.roles_by_name.get_or_insert_with(fold_name(&pre.name), MultiVersionRoleId::new);
				by_name.value().remove(version);
			}
		}

		let multi = self.roles.get_or_insert_with(id, MultiVersionRoleDef::new);
		match role {
			Some(new) => {
				let by_name = self.roles_by_name.get_or_insert_with(fold_name(&new.name), MultiVersionRoleId::new);
				by_name.value().insert(version, id);
				multi.value().insert(version, new);
			}
			None => multi.value().remove(version),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn create_test_role(id: RoleId, name: &str) -> RoleDef {
		RoleDef {
			id,
			name: name.to_string(),
			grant_groups: vec![],
		}
	}

	#[test]
	fn test_set_and_find_role() {
		let catalog = MaterializedCatalog::new();
		let role_id = RoleId(1);
		let role = create_test_role(role_id, "analyst");

		catalog.set_role(role_id, CommitVersion(1), Some(role.clone()));

		assert_eq!(catalog.find_role_at(role_id, CommitVersion(1)), Some(role.clone()));
		assert_eq!(catalog.find_role_at(role_id, CommitVersion(5)), Some(role));
		assert_eq!(catalog.find_role_at(role_id, CommitVersion(0)), None);
	}

	#[test]
	fn test_find_role_by_name_folds_case() {
		let catalog = MaterializedCatalog::new();
		let role = create_test_role(RoleId(1), "Admin");
		catalog.set_role(RoleId(1), CommitVersion(1), Some(role.clone()));

		assert_eq!(catalog.find_role_by_name_at("admin", CommitVersion(1)), Some(role.clone()));
		assert_eq!(catalog.find_role_by_name_at("ADMIN", CommitVersion(1)), Some(role));
		assert_eq!(catalog.find_role_by_name_at("admins", CommitVersion(1)), None);
	}

	#[test]
	fn test_drop_role_keeps_history() {
		let catalog = MaterializedCatalog::new();
		let role = create_test_role(RoleId(1), "analyst");
		catalog.set_role(RoleId(1), CommitVersion(1), Some(role.clone()));
		catalog.set_role(RoleId(1), CommitVersion(2), None);

		assert_eq!(catalog.find_role_by_name_at("analyst", CommitVersion(1)), Some(role));
		assert_eq!(catalog.find_role_by_name_at("analyst", CommitVersion(2)), None);
		assert!(catalog.list_roles_at(CommitVersion(2)).is_empty());
	}

	#[test]
	fn test_recreate_role_under_new_id() {
		let catalog = MaterializedCatalog::new();
		let first = create_test_role(RoleId(1), "analyst");
		let second = create_test_role(RoleId(2), "analyst");

		catalog.set_role(RoleId(1), CommitVersion(1), Some(first.clone()));
		catalog.set_role(RoleId(1), CommitVersion(2), None);
		catalog.set_role(RoleId(2), CommitVersion(3), Some(second.clone()));

		assert_eq!(catalog.find_role_by_name_at("analyst", CommitVersion(1)), Some(first));
		assert_eq!(catalog.find_role_by_name_at("analyst", CommitVersion(2)), None);
		assert_eq!(catalog.find_role_by_name_at("analyst", CommitVersion(3)), Some(second));
	}

	#[test]
	fn test_update_role_in_place() {
		let catalog = MaterializedCatalog::new();
		let v1 = create_test_role(RoleId(1), "analyst");
		let mut v2 = v1.clone();
		v2.grant_groups.push("finance".to_string());

		catalog.set_role(RoleId(1), CommitVersion(1), Some(v1.clone()));
		catalog.set_role(RoleId(1), CommitVersion(2), Some(v2.clone()));

		assert_eq!(catalog.find_role_by_name_at("analyst", CommitVersion(1)), Some(v1));
		assert_eq!(catalog.find_role_by_name_at("analyst", CommitVersion(2)), Some(v2));
		assert_eq!(catalog.list_roles_at(CommitVersion(2)).len(), 1);
	}
}
