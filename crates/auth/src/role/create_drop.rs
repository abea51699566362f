// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use tracing::instrument;

use crate::{
	AnalysisContext, AnalysisState, AuthorizationParams, AuthorizationStatement, CreateDropRoleParams,
	error::SemanticError,
	role::{RoleOperation, require_role_name},
	statement::{AnalysisPass, reject},
};

/// `CREATE ROLE name` or `DROP ROLE name`
#[derive(Debug, Clone)]
pub struct CreateDropRoleStatement {
	role_name: String,
	operation: RoleOperation,
	analysis: AnalysisPass,
}

impl CreateDropRoleStatement {
	/// Fails on an empty role name; the catalog is not consulted
	pub fn new(role_name: impl Into<String>, is_drop: bool) -> crate::Result<Self> {
		let operation = if is_drop {
			RoleOperation::Drop
		} else {
			RoleOperation::Create
		};
		Ok(Self {
			role_name: require_role_name(role_name.into())?,
			operation,
			analysis: AnalysisPass::new(),
		})
	}

	pub fn create_role(role_name: impl Into<String>) -> crate::Result<Self> {
		Self::new(role_name, false)
	}

	pub fn drop_role(role_name: impl Into<String>) -> crate::Result<Self> {
		Self::new(role_name, true)
	}

	pub fn role_name(&self) -> &str {
		&self.role_name
	}

	pub fn operation(&self) -> RoleOperation {
		self.operation
	}

	pub fn is_drop(&self) -> bool {
		self.operation.is_drop()
	}

	pub fn params(&self) -> CreateDropRoleParams {
		CreateDropRoleParams {
			role_name: self.role_name.clone(),
			is_drop: self.is_drop(),
		}
	}
}

impl AuthorizationStatement for CreateDropRoleStatement {
	#[instrument(name = "auth::role::analyze", level = "debug", skip_all, fields(role = %self.role_name, operation = %self.operation))]
	fn analyze(&mut self, ctx: &AnalysisContext<'_>) -> crate::Result<()> {
		let text = self.render_text();
		let Self {
			role_name,
			operation,
			analysis,
		} = self;
		analysis.run(&text, ctx, || check_existence(role_name, *operation, &text, ctx))
	}

	fn render_text(&self) -> String {
		// name before keyword, as the engine has always logged it
		format!("{} ROLE {}", self.role_name, self.operation)
	}

	fn to_descriptor(&self) -> AuthorizationParams {
		AuthorizationParams::CreateDropRole(self.params())
	}

	fn state(&self) -> AnalysisState {
		self.analysis.state()
	}

	fn analyzing_user(&self) -> Option<&str> {
		self.analysis.analyzing_user()
	}
}

impl Display for CreateDropRoleStatement {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render_text())
	}
}

/// Create requires the role to be absent, drop requires it to be present
fn check_existence(
	role_name: &str,
	operation: RoleOperation,
	statement: &str,
	ctx: &AnalysisContext<'_>,
) -> crate::Result<()> {
	let existing = ctx.catalog().find_role_by_name(role_name)?;
	match (operation, existing) {
		(RoleOperation::Drop, None) => Err(reject(
			SemanticError::RoleDoesNotExist {
				role: role_name.to_string(),
			},
			statement,
		)),
		(RoleOperation::Create, Some(_)) => Err(reject(
			SemanticError::RoleAlreadyExists {
				role: role_name.to_string(),
			},
			statement,
		)),
		(RoleOperation::Drop, Some(_)) | (RoleOperation::Create, None) => Ok(()),
	}
}
