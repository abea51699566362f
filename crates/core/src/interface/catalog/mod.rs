// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub use role::*;

mod role;

/// Read access to the roles of the authorization policy.
///
/// Implementations decide how names are compared; the in-memory catalog
/// folds case.
pub trait RoleLookup {
	fn find_role_by_name(&self, name: &str) -> warden_type::Result<Option<RoleDef>>;
}
