// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(pub u64);

impl Deref for RoleId {
	type Target = u64;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq<u64> for RoleId {
	fn eq(&self, other: &u64) -> bool {
		self.0.eq(other)
	}
}

impl From<RoleId> for u64 {
	fn from(value: RoleId) -> Self {
		value.0
	}
}

impl Display for RoleId {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDef {
	pub id: RoleId,
	pub name: String,
	/// Groups the role has been granted to
	pub grant_groups: Vec<String>,
}

impl RoleDef {
	pub fn is_granted_to(&self, group: &str) -> bool {
		self.grant_groups.iter().any(|g| g == group)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_role_id_serializes_as_u64() {
		let bytes = postcard::to_allocvec(&RoleId(42)).unwrap();
		assert_eq!(bytes, postcard::to_allocvec(&42u64).unwrap());
	}

	#[test]
	fn test_is_granted_to() {
		let role = RoleDef {
			id: RoleId(1),
			name: "analyst".to_string(),
			grant_groups: vec!["finance".to_string()],
		};
		assert!(role.is_granted_to("finance"));
		assert!(!role.is_granted_to("sales"));
	}
}
