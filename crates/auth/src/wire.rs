// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Byte encoding of descriptors handed to the execution backend

use tracing::trace;

use crate::AuthorizationParams;

pub fn encode(params: &AuthorizationParams) -> crate::Result<Vec<u8>> {
	let bytes = postcard::to_allocvec(params)?;
	trace!(len = bytes.len(), "encoded authorization descriptor");
	Ok(bytes)
}

pub fn decode(bytes: &[u8]) -> crate::Result<AuthorizationParams> {
	Ok(postcard::from_bytes(bytes)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CreateDropRoleParams, ShowRolesParams};

	#[test]
	fn test_create_drop_role_survives_encoding() {
		let params = AuthorizationParams::CreateDropRole(CreateDropRoleParams {
			role_name: "analyst".to_string(),
			is_drop: true,
		});
		let bytes = encode(&params).unwrap();
		assert_eq!(decode(&bytes).unwrap(), params);
	}

	#[test]
	fn test_show_roles_survives_encoding() {
		let params = AuthorizationParams::ShowRoles(ShowRolesParams {
			requesting_user: Some("alice".to_string()),
			is_show_current_roles: false,
			grant_group: Some("finance".to_string()),
		});
		let bytes = encode(&params).unwrap();
		assert_eq!(decode(&bytes).unwrap(), params);
	}

	#[test]
	fn test_decode_truncated() {
		let params = AuthorizationParams::CreateDropRole(CreateDropRoleParams {
			role_name: "analyst".to_string(),
			is_drop: false,
		});
		let bytes = encode(&params).unwrap();
		let err = decode(&bytes[..3]).unwrap_err();
		assert_eq!(err.code, "SERDE_002");
	}

	#[test]
	fn test_decode_unknown_variant() {
		let err = decode(&[9]).unwrap_err();
		assert_eq!(err.code, "SERDE_002");
	}
}
