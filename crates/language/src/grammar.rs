//! Grammar definitions registered with the tokenizer at runtime.

use thiserror::Error;

/// Errors raised while registering or loading a grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
	#[error("grammar '{grammar}' extends unknown grammar '{base}'")]
	MissingBase { grammar: String, base: String },

	#[error("grammar '{grammar}' embeds unknown grammar '{embedded}'")]
	MissingEmbedded { grammar: String, embedded: String },

	#[error("grammar already registered: {0}")]
	AlreadyRegistered(String),

	#[error("failed to load grammar '{grammar}': {reason}")]
	LoadFailed { grammar: String, reason: String },
}

/// A grammar supplied from outside the tokenizer's built-in inventory.
///
/// External grammars are expressed as an extension of an existing base
/// grammar, optionally embedding others (script and style blocks of a markup
/// dialect, for instance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarDef {
	/// Grammar id the tokenizer will answer to.
	pub id: String,
	/// Built-in grammar this one extends.
	pub base: String,
	/// Grammars embedded inside documents of this grammar.
	pub embedded: Vec<String>,
}

impl GrammarDef {
	pub fn new(id: impl Into<String>, base: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			base: base.into(),
			embedded: Vec::new(),
		}
	}

	pub fn embedding(mut self, grammar: impl Into<String>) -> Self {
		self.embedded.push(grammar.into());
		self
	}
}
