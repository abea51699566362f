// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Display};

use tracing::{debug, warn};

use warden_type::Error;

use crate::{AnalysisContext, AuthorizationParams, error::SemanticError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisState {
	Unanalyzed,
	Analyzed,
	Rejected,
}

impl Display for AnalysisState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AnalysisState::Unanalyzed => f.write_str("unanalyzed"),
			AnalysisState::Analyzed => f.write_str("analyzed"),
			AnalysisState::Rejected => f.write_str("rejected"),
		}
	}
}

/// A statement of the authorization subsystem.
///
/// `analyze` runs once; the text form and the descriptor only reflect the
/// statement's input and are available in every state. Callers should only
/// hand descriptors of analyzed statements to execution.
pub trait AuthorizationStatement: Display + Debug {
	fn analyze(&mut self, ctx: &AnalysisContext<'_>) -> crate::Result<()>;

	/// Text form for logs and explain output; not meant to be parsed back
	fn render_text(&self) -> String;

	fn to_descriptor(&self) -> AuthorizationParams;

	fn state(&self) -> AnalysisState;

	/// User recorded by a successful analysis pass
	fn analyzing_user(&self) -> Option<&str>;
}

/// Drives the one-time analysis of a statement
#[derive(Debug, Clone)]
pub(crate) struct AnalysisPass {
	state: AnalysisState,
	analyzing_user: Option<String>,
}

impl AnalysisPass {
	pub(crate) fn new() -> Self {
		Self {
			state: AnalysisState::Unanalyzed,
			analyzing_user: None,
		}
	}

	pub(crate) fn state(&self) -> AnalysisState {
		self.state
	}

	pub(crate) fn analyzing_user(&self) -> Option<&str> {
		self.analyzing_user.as_deref()
	}

	/// Runs the base validator and then `check`, recording the outcome
	pub(crate) fn run(
		&mut self,
		statement: &str,
		ctx: &AnalysisContext<'_>,
		check: impl FnOnce() -> crate::Result<()>,
	) -> crate::Result<()> {
		if self.state != AnalysisState::Unanalyzed {
			return Err(SemanticError::StatementAlreadyAnalyzed {
				statement: statement.to_string(),
			}
			.into());
		}

		let result = ctx.validator().validate(ctx).and_then(|_| check());

		match result {
			Ok(()) => {
				self.analyzing_user = Some(ctx.requesting_user().to_string());
				self.state = AnalysisState::Analyzed;
				debug!(statement, user = ctx.requesting_user(), "statement analyzed");
				Ok(())
			}
			Err(err) => {
				self.state = AnalysisState::Rejected;
				warn!(statement, code = %err.code, "statement rejected");
				Err(err)
			}
		}
	}
}

/// A semantic failure of `statement`, carrying its text
pub(crate) fn reject(err: SemanticError, statement: &str) -> Error {
	let mut err = Error::from(err);
	err.0 = err.0.with_statement(statement);
	err
}
