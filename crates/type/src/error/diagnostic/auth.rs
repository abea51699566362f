// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// Authorization statements were issued while authorization is disabled
pub fn authorization_not_enabled() -> Diagnostic {
	Diagnostic {
		code: "AUTH_001".to_string(),
		statement: None,
		message: "Authorization is not enabled. To enable authorization restart with a server name configured."
			.to_string(),
		label: None,
		help: Some("Configure a server name for the authorization subsystem".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// The session issuing an authorization statement has no user name
pub fn empty_user() -> Diagnostic {
	Diagnostic {
		code: "AUTH_002".to_string(),
		statement: None,
		message: "Cannot execute authorization statement with an empty username.".to_string(),
		label: None,
		help: Some("Authenticate as a named user before managing roles".to_string()),
		notes: vec![],
		cause: None,
	}
}
