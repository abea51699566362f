// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn postcard_encode_error(err: postcard::Error) -> Diagnostic {
	Diagnostic {
		code: "SERDE_001".to_string(),
		statement: None,
		message: format!("Failed to encode descriptor: {}", err),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn postcard_decode_error(err: postcard::Error) -> Diagnostic {
	Diagnostic {
		code: "SERDE_002".to_string(),
		statement: None,
		message: format!("Failed to decode descriptor: {}", err),
		label: None,
		help: Some("The payload was not produced by a compatible encoder".to_string()),
		notes: vec![],
		cause: None,
	}
}
