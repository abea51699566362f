// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

pub use create_drop::CreateDropRoleStatement;
pub use grant_revoke::GrantRevokeRoleStatement;
pub use show::ShowRolesStatement;

use crate::error::SemanticError;

mod create_drop;
mod grant_revoke;
mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleOperation {
	Create,
	Drop,
}

impl RoleOperation {
	pub fn is_drop(self) -> bool {
		matches!(self, RoleOperation::Drop)
	}
}

impl Display for RoleOperation {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			RoleOperation::Create => f.write_str("CREATE"),
			RoleOperation::Drop => f.write_str("DROP"),
		}
	}
}

fn require_role_name(name: String) -> crate::Result<String> {
	if name.trim().is_empty() {
		return Err(SemanticError::EmptyRoleName.into());
	}
	Ok(name)
}

fn require_group_name(name: String) -> crate::Result<String> {
	if name.trim().is_empty() {
		return Err(SemanticError::EmptyGroupName.into());
	}
	Ok(name)
}
