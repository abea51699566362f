// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use tracing::instrument;

use crate::{
	AnalysisContext, AnalysisState, AuthorizationParams, AuthorizationStatement, GrantRevokeRoleParams,
	error::SemanticError,
	role::{require_group_name, require_role_name},
	statement::{AnalysisPass, reject},
};

/// `GRANT ROLE role TO GROUP group` or `REVOKE ROLE role FROM GROUP group`
#[derive(Debug, Clone)]
pub struct GrantRevokeRoleStatement {
	role_name: String,
	group_name: String,
	is_grant: bool,
	analysis: AnalysisPass,
}

impl GrantRevokeRoleStatement {
	pub fn new(role_name: impl Into<String>, group_name: impl Into<String>, is_grant: bool) -> crate::Result<Self> {
		Ok(Self {
			role_name: require_role_name(role_name.into())?,
			group_name: require_group_name(group_name.into())?,
			is_grant,
			analysis: AnalysisPass::new(),
		})
	}

	pub fn grant(role_name: impl Into<String>, group_name: impl Into<String>) -> crate::Result<Self> {
		Self::new(role_name, group_name, true)
	}

	pub fn revoke(role_name: impl Into<String>, group_name: impl Into<String>) -> crate::Result<Self> {
		Self::new(role_name, group_name, false)
	}

	pub fn role_name(&self) -> &str {
		&self.role_name
	}

	pub fn group_name(&self) -> &str {
		&self.group_name
	}

	pub fn is_grant(&self) -> bool {
		self.is_grant
	}

	pub fn params(&self) -> GrantRevokeRoleParams {
		GrantRevokeRoleParams {
			role_names: vec![self.role_name.clone()],
			group_names: vec![self.group_name.clone()],
			is_grant: self.is_grant,
		}
	}
}

impl AuthorizationStatement for GrantRevokeRoleStatement {
	#[instrument(name = "auth::role::grant_revoke::analyze", level = "debug", skip_all, fields(role = %self.role_name, group = %self.group_name))]
	fn analyze(&mut self, ctx: &AnalysisContext<'_>) -> crate::Result<()> {
		let text = self.render_text();
		let Self {
			role_name,
			analysis,
			..
		} = self;
		analysis.run(&text, ctx, || {
			if ctx.catalog().find_role_by_name(role_name)?.is_none() {
				return Err(reject(
					SemanticError::RoleDoesNotExist {
						role: role_name.to_string(),
					},
					&text,
				));
			}
			Ok(())
		})
	}

	fn render_text(&self) -> String {
		if self.is_grant {
			format!("GRANT ROLE {} TO GROUP {}", self.role_name, self.group_name)
		} else {
			format!("REVOKE ROLE {} FROM GROUP {}", self.role_name, self.group_name)
		}
	}

	fn to_descriptor(&self) -> AuthorizationParams {
		AuthorizationParams::GrantRevokeRole(self.params())
	}

	fn state(&self) -> AnalysisState {
		self.analysis.state()
	}

	fn analyzing_user(&self) -> Option<&str> {
		self.analysis.analyzing_user()
	}
}

impl Display for GrantRevokeRoleStatement {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render_text())
	}
}
