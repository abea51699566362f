// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDropRoleParams {
	pub role_name: String,
	pub is_drop: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRevokeRoleParams {
	pub role_names: Vec<String>,
	pub group_names: Vec<String>,
	pub is_grant: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowRolesParams {
	pub requesting_user: Option<String>,
	pub is_show_current_roles: bool,
	pub grant_group: Option<String>,
}

/// What an analyzed authorization statement asks the execution layer to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationParams {
	CreateDropRole(CreateDropRoleParams),
	GrantRevokeRole(GrantRevokeRoleParams),
	ShowRoles(ShowRolesParams),
}
