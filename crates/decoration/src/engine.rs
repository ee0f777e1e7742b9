//! Per-document decoration engine seam.
//!
//! Engines own tokenization results and render the bracket decorations for a
//! single document. The manager only decides when they are built, fed and
//! disposed.

use pairlight_config::DecorationSettings;
use pairlight_primitives::ContentChange;
use thiserror::Error;

use crate::document::TextDocument;

/// Errors raised while constructing an engine.
#[derive(Debug, Error)]
pub enum EngineError {
	/// Construction was abandoned without anything worth telling the user.
	#[error("engine construction aborted")]
	Aborted,

	#[error("tokenizer rejected grammar '{grammar}': {reason}")]
	Tokenizer { grammar: String, reason: String },

	#[error("{0}")]
	Other(String),
}

/// Decorations for one document.
pub trait DecorationEngine {
	/// Recomputes and redraws decorations for the full current content.
	fn trigger_update_decorations(&mut self, document: &dyn TextDocument);

	/// Applies the ordered edits of one document version bump.
	fn on_did_change_text_document(&mut self, document: &dyn TextDocument, changes: &[ContentChange]);

	/// Releases decorations and any other resources held by the engine.
	fn dispose(&mut self);
}

/// Builds engines for newly resolved documents.
pub trait EngineFactory {
	type Engine: DecorationEngine;

	fn create(
		&self,
		document: &dyn TextDocument,
		settings: DecorationSettings,
	) -> Result<Self::Engine, EngineError>;
}
