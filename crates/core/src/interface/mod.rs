// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub use auth::*;

mod auth;
pub mod catalog;
