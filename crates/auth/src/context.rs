// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use warden_core::interface::{Identity, catalog::RoleLookup};

use crate::BaseValidator;

/// Everything a statement may consult while it is analyzed
#[derive(Clone, Copy)]
pub struct AnalysisContext<'a> {
	catalog: &'a dyn RoleLookup,
	user: &'a Identity,
	validator: &'a dyn BaseValidator,
}

impl<'a> AnalysisContext<'a> {
	pub fn new(catalog: &'a dyn RoleLookup, user: &'a Identity, validator: &'a dyn BaseValidator) -> Self {
		Self {
			catalog,
			user,
			validator,
		}
	}

	pub fn catalog(&self) -> &'a dyn RoleLookup {
		self.catalog
	}

	pub fn user(&self) -> &'a Identity {
		self.user
	}

	pub fn validator(&self) -> &'a dyn BaseValidator {
		self.validator
	}

	/// Name of the user issuing the statement; empty for anonymous sessions
	pub fn requesting_user(&self) -> &'a str {
		self.user.name().unwrap_or("")
	}
}
