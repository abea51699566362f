// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use base::{AuthorizationGate, BaseValidator};
pub use config::{AuthorizationBuilder, AuthorizationConfig};
pub use context::AnalysisContext;
pub use params::{AuthorizationParams, CreateDropRoleParams, GrantRevokeRoleParams, ShowRolesParams};
pub use role::{CreateDropRoleStatement, GrantRevokeRoleStatement, RoleOperation, ShowRolesStatement};
pub use statement::{AnalysisState, AuthorizationStatement};

mod base;
mod config;
mod context;
pub mod error;
mod params;
mod role;
mod statement;
pub mod wire;

pub type Result<T> = warden_type::Result<T>;
