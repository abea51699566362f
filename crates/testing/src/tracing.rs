// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing_subscriber::{EnvFilter, fmt};

/// Install a test subscriber filtered by `RUST_LOG`; later calls are no-ops
pub fn init() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}
