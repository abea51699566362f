// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use tracing::instrument;

use crate::{
	AnalysisContext, AnalysisState, AuthorizationParams, AuthorizationStatement, ShowRolesParams,
	role::require_group_name, statement::AnalysisPass,
};

/// `SHOW ROLES`, `SHOW CURRENT ROLES` or `SHOW ROLE GRANT GROUP group`
#[derive(Debug, Clone)]
pub struct ShowRolesStatement {
	is_show_current_roles: bool,
	grant_group: Option<String>,
	analysis: AnalysisPass,
}

impl ShowRolesStatement {
	pub fn all() -> Self {
		Self {
			is_show_current_roles: false,
			grant_group: None,
			analysis: AnalysisPass::new(),
		}
	}

	pub fn current() -> Self {
		Self {
			is_show_current_roles: true,
			grant_group: None,
			analysis: AnalysisPass::new(),
		}
	}

	pub fn granted_to(group: impl Into<String>) -> crate::Result<Self> {
		Ok(Self {
			is_show_current_roles: false,
			grant_group: Some(require_group_name(group.into())?),
			analysis: AnalysisPass::new(),
		})
	}

	pub fn is_show_current_roles(&self) -> bool {
		self.is_show_current_roles
	}

	pub fn grant_group(&self) -> Option<&str> {
		self.grant_group.as_deref()
	}

	pub fn params(&self) -> ShowRolesParams {
		ShowRolesParams {
			requesting_user: self.analysis.analyzing_user().map(str::to_string),
			is_show_current_roles: self.is_show_current_roles,
			grant_group: self.grant_group.clone(),
		}
	}
}

impl AuthorizationStatement for ShowRolesStatement {
	#[instrument(name = "auth::role::show::analyze", level = "debug", skip_all)]
	fn analyze(&mut self, ctx: &AnalysisContext<'_>) -> crate::Result<()> {
		let text = self.render_text();
		self.analysis.run(&text, ctx, || Ok(()))
	}

	fn render_text(&self) -> String {
		match (&self.grant_group, self.is_show_current_roles) {
			(Some(group), _) => format!("SHOW ROLE GRANT GROUP {}", group),
			(None, true) => "SHOW CURRENT ROLES".to_string(),
			(None, false) => "SHOW ROLES".to_string(),
		}
	}

	fn to_descriptor(&self) -> AuthorizationParams {
		AuthorizationParams::ShowRoles(self.params())
	}

	fn state(&self) -> AnalysisState {
		self.analysis.state()
	}

	fn analyzing_user(&self) -> Option<&str> {
		self.analysis.analyzing_user()
	}
}

impl Display for ShowRolesStatement {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render_text())
	}
}
