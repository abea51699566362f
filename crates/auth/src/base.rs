// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::{instrument, trace};

use crate::{AnalysisContext, AuthorizationConfig, error::AuthError};

/// Precondition step shared by all authorization statements.
///
/// Runs before a statement's own checks; its failures are returned to the
/// caller untouched.
pub trait BaseValidator {
	fn validate(&self, ctx: &AnalysisContext<'_>) -> crate::Result<()>;
}

/// Requires authorization to be enabled and the session to carry a user name
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
	config: AuthorizationConfig,
}

impl AuthorizationGate {
	pub fn new(config: AuthorizationConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn config(&self) -> &AuthorizationConfig {
		&self.config
	}
}

impl BaseValidator for AuthorizationGate {
	#[instrument(name = "auth::gate::validate", level = "trace", skip_all, fields(user = %ctx.user()))]
	fn validate(&self, ctx: &AnalysisContext<'_>) -> crate::Result<()> {
		if !self.config.is_enabled() {
			return Err(AuthError::AuthorizationNotEnabled.into());
		}
		if ctx.requesting_user().is_empty() {
			return Err(AuthError::EmptyUser.into());
		}
		trace!("authorization preconditions satisfied");
		Ok(())
	}
}
