// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use catalog::{Catalog, CatalogSnapshot};
pub use materialized::MaterializedCatalog;

pub mod catalog;
pub mod error;
pub mod materialized;

pub type Result<T> = warden_type::Result<T>;
