// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt;

pub type IdentityId = u64;

/// The principal a session runs as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
	Anonymous {},
	System {
		id: IdentityId,
		name: String,
	},
	User {
		id: IdentityId,
		name: String,
	},
}

impl Identity {
	pub fn root() -> Self {
		Self::System {
			id: 0,
			name: "root".to_string(),
		}
	}

	pub fn user(id: IdentityId, name: impl Into<String>) -> Self {
		Self::User {
			id,
			name: name.into(),
		}
	}

	/// The user name, or `None` for anonymous sessions and blank names
	pub fn name(&self) -> Option<&str> {
		match self {
			Self::Anonymous {} => None,
			Self::System {
				name,
				..
			}
			| Self::User {
				name,
				..
			} => Some(name.as_str()).filter(|n| !n.trim().is_empty()),
		}
	}
}

impl fmt::Display for Identity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Anonymous {} => write!(f, "anonymous"),
			Self::System {
				id,
				..
			} => write!(f, "system:{}", id),
			Self::User {
				id,
				..
			} => write!(f, "user:{}", id),
		}
	}
}
