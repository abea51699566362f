// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

pub mod auth;
pub mod serialization;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	/// Text form of the statement the diagnostic was raised for, if any
	pub statement: Option<String>,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	/// Attach the statement text, keeping an existing one
	pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
		if self.statement.is_none() {
			self.statement = Some(statement.into());
		}
		self
	}

	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_with_statement_keeps_first() {
		let diagnostic = auth::empty_user().with_statement("SHOW ROLES").with_statement("SHOW CURRENT ROLES");
		assert_eq!(diagnostic.statement.as_deref(), Some("SHOW ROLES"));
	}

	#[test]
	fn test_serde_json() {
		let diagnostic = auth::authorization_not_enabled().with_cause(auth::empty_user());
		let json = serde_json::to_string(&diagnostic).unwrap();
		let back: Diagnostic = serde_json::from_str(&json).unwrap();
		assert_eq!(back, diagnostic);
	}
}
