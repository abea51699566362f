// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Wraps a diagnostic into an [`Error`](crate::error::Error).
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error($diagnostic)
	};
}

/// Returns early with an [`Error`](crate::error::Error) built from a diagnostic.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error::Error($diagnostic))
	};
}

/// Builds an `Err` result from a diagnostic.
#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::error::Error($diagnostic))
	};
}

#[cfg(test)]
mod tests {
	use crate::{Result, error::diagnostic::auth};

	fn reject(reject: bool) -> Result<u8> {
		if reject {
			return_error!(auth::empty_user());
		}
		Ok(1)
	}

	#[test]
	fn test_return_error() {
		assert_eq!(reject(false).unwrap(), 1);
		assert_eq!(reject(true).unwrap_err().code, "AUTH_002");
	}

	#[test]
	fn test_err() {
		let result: Result<()> = err!(auth::authorization_not_enabled());
		assert_eq!(result.unwrap_err().code, "AUTH_001");
	}
}
