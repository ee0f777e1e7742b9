//! Errors raised while resolving a document's engine.

use pairlight_config::ConfigError;
use pairlight_language::GrammarError;
use thiserror::Error;

use crate::engine::EngineError;

/// Failure to build an engine for a document.
///
/// These never escape the manager: they are logged, optionally shown to the
/// user through the [`ErrorThrottle`](crate::ErrorThrottle), and the document
/// is retried on its next event.
#[derive(Debug, Error)]
pub enum DecorationError {
	#[error(transparent)]
	Grammar(#[from] GrammarError),

	#[error(transparent)]
	Settings(#[from] ConfigError),

	#[error(transparent)]
	Engine(#[from] EngineError),
}

impl DecorationError {
	/// Message worth showing to the user, if any.
	pub fn user_message(&self) -> Option<String> {
		match self {
			DecorationError::Engine(EngineError::Aborted) => None,
			other => Some(other.to_string()),
		}
	}
}
