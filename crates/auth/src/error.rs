// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use warden_type::{
	Error,
	error::{
		IntoDiagnostic,
		diagnostic::{Diagnostic, auth},
	},
};

/// Failures of the shared precondition step run before any statement logic
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
	#[error("Authorization is not enabled")]
	AuthorizationNotEnabled,

	#[error("Cannot execute authorization statement with an empty username")]
	EmptyUser,
}

impl IntoDiagnostic for AuthError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			AuthError::AuthorizationNotEnabled => auth::authorization_not_enabled(),
			AuthError::EmptyUser => auth::empty_user(),
		}
	}
}

impl From<AuthError> for Error {
	fn from(err: AuthError) -> Self {
		Error(err.into_diagnostic())
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SemanticError {
	#[error("Role '{role}' already exists.")]
	RoleAlreadyExists {
		role: String,
	},

	#[error("Role '{role}' does not exist.")]
	RoleDoesNotExist {
		role: String,
	},

	#[error("Role name cannot be empty")]
	EmptyRoleName,

	#[error("Group name cannot be empty")]
	EmptyGroupName,

	#[error("Statement '{statement}' has already been analyzed")]
	StatementAlreadyAnalyzed {
		statement: String,
	},
}

impl IntoDiagnostic for SemanticError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			SemanticError::RoleAlreadyExists {
				role,
			} => Diagnostic {
				code: "ROLE_001".to_string(),
				statement: None,
				message,
				label: Some("role already exists".to_string()),
				help: Some(format!("Drop role '{}' first or choose a different name", role)),
				notes: vec![],
				cause: None,
			},
			SemanticError::RoleDoesNotExist {
				role,
			} => Diagnostic {
				code: "ROLE_002".to_string(),
				statement: None,
				message,
				label: Some("unknown role".to_string()),
				help: Some(format!("Create role '{}' before referencing it", role)),
				notes: vec![],
				cause: None,
			},
			SemanticError::EmptyRoleName => Diagnostic {
				code: "ROLE_003".to_string(),
				statement: None,
				message,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
			SemanticError::EmptyGroupName => Diagnostic {
				code: "ROLE_004".to_string(),
				statement: None,
				message,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
			SemanticError::StatementAlreadyAnalyzed {
				..
			} => Diagnostic {
				code: "ROLE_005".to_string(),
				statement: None,
				message,
				label: None,
				help: Some("Construct a new statement to analyze it again".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<SemanticError> for Error {
	fn from(err: SemanticError) -> Self {
		Error(err.into_diagnostic())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_role_already_exists() {
		let err: Error = SemanticError::RoleAlreadyExists {
			role: "analyst".to_string(),
		}
		.into();
		assert_eq!(err.code, "ROLE_001");
		assert_eq!(err.message, "Role 'analyst' already exists.");
	}

	#[test]
	fn test_role_does_not_exist() {
		let err: Error = SemanticError::RoleDoesNotExist {
			role: "ghost".to_string(),
		}
		.into();
		assert_eq!(err.code, "ROLE_002");
		assert_eq!(err.message, "Role 'ghost' does not exist.");
	}

	#[test]
	fn test_auth_error_uses_shared_diagnostics() {
		let err: Error = AuthError::EmptyUser.into();
		assert_eq!(err.code, "AUTH_002");
		let err: Error = AuthError::AuthorizationNotEnabled.into();
		assert_eq!(err.code, "AUTH_001");
	}
}
