// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use warden_type::{
	Error,
	error::{IntoDiagnostic, diagnostic::Diagnostic},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogObjectKind {
	Role,
}

impl Display for CatalogObjectKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			CatalogObjectKind::Role => f.write_str("Role"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
	#[error("{kind} '{name}' already exists")]
	AlreadyExists {
		kind: CatalogObjectKind,
		name: String,
	},

	#[error("{kind} '{name}' not found")]
	NotFound {
		kind: CatalogObjectKind,
		name: String,
	},

	#[error("Role '{role}' is already granted to group '{group}'")]
	GroupAlreadyGranted {
		role: String,
		group: String,
	},

	#[error("Role '{role}' is not granted to group '{group}'")]
	GroupNotGranted {
		role: String,
		group: String,
	},
}

impl IntoDiagnostic for CatalogError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			CatalogError::AlreadyExists {
				kind,
				..
			} => Diagnostic {
				code: "CA_001".to_string(),
				statement: None,
				message,
				label: Some(format!("duplicate {} definition", kind.to_string().to_lowercase())),
				help: Some("Choose a different name or drop the existing definition first".to_string()),
				notes: vec![],
				cause: None,
			},
			CatalogError::NotFound {
				kind,
				..
			} => Diagnostic {
				code: "CA_002".to_string(),
				statement: None,
				message,
				label: Some(format!("unknown {}", kind.to_string().to_lowercase())),
				help: None,
				notes: vec![],
				cause: None,
			},
			CatalogError::GroupAlreadyGranted {
				..
			} => Diagnostic {
				code: "CA_003".to_string(),
				statement: None,
				message,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
			CatalogError::GroupNotGranted {
				..
			} => Diagnostic {
				code: "CA_004".to_string(),
				statement: None,
				message,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<CatalogError> for Error {
	fn from(err: CatalogError) -> Self {
		Error(err.into_diagnostic())
	}
}
