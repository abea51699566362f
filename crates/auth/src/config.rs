// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Builder pattern for configuring authorization

/// Configuration for the authorization gate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationConfig {
	/// Name of the server privileges are scoped to; authorization is
	/// disabled while unset
	pub server_name: Option<String>,
}

impl AuthorizationConfig {
	pub fn is_enabled(&self) -> bool {
		self.server_name.as_deref().is_some_and(|name| !name.trim().is_empty())
	}
}

#[derive(Debug, Default)]
pub struct AuthorizationBuilder {
	server_name: Option<String>,
}

impl AuthorizationBuilder {
	/// Create a new AuthorizationBuilder with authorization disabled
	pub fn new() -> Self {
		Self {
			server_name: None,
		}
	}

	/// Enable authorization for the given server
	pub fn server_name(mut self, name: impl Into<String>) -> Self {
		self.server_name = Some(name.into());
		self
	}

	pub fn build(self) -> AuthorizationConfig {
		AuthorizationConfig {
			server_name: self.server_name,
		}
	}
}
