//! Document decoration registry and event routing.
//!
//! [`DocumentDecorationManager`] maps each open document to its decoration
//! engine:
//! - engines are built on the first event for a supported document
//! - later events reuse the cached engine, never rebuilding it
//! - closing a document disposes its engine immediately
//! - [`reset`](DocumentDecorationManager::reset) rebuilds everything visible
//!
//! # Error Handling
//!
//! - Unsupported document or language: skipped silently, retried next event
//! - Grammar loading, settings or engine construction failure: logged,
//!   reported through the [`ErrorThrottle`], nothing cached, retried next event

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::Arc;

use pairlight_config::{DecorationConfig, DecorationSettings};
use pairlight_language::{GrammarGate, grammar_id_for};
use pairlight_primitives::{ContentChange, DocumentKey, Url};
use tracing::{debug, trace, warn};

use crate::document::{TextDocument, is_valid_document};
use crate::engine::{DecorationEngine, EngineFactory};
use crate::error::DecorationError;
use crate::host::Host;
use crate::throttle::ErrorThrottle;

/// Prefix of every error message shown to the user.
pub const ERROR_PREFIX: &str = "Pairlight settings: ";

/// Registry of per-document decoration engines.
pub struct DocumentDecorationManager<F: EngineFactory> {
	host: Arc<dyn Host>,
	factory: F,
	config: DecorationConfig,
	grammars: GrammarGate,
	throttle: ErrorThrottle,
	documents: HashMap<DocumentKey, F::Engine>,
}

impl<F: EngineFactory> fmt::Debug for DocumentDecorationManager<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DocumentDecorationManager")
			.field("documents", &self.documents.len())
			.field("grammars", &self.grammars)
			.field("throttle", &self.throttle)
			.finish()
	}
}

impl<F: EngineFactory> DocumentDecorationManager<F> {
	/// Creates a manager with default settings.
	pub fn new(host: Arc<dyn Host>, factory: F, grammars: GrammarGate, throttle: ErrorThrottle) -> Self {
		Self {
			host,
			factory,
			config: DecorationConfig::default(),
			grammars,
			throttle,
			documents: HashMap::new(),
		}
	}

	/// Replaces the settings used for engines built from now on.
	///
	/// Existing engines keep their snapshot; use [`set_config`] to rebuild them.
	///
	/// [`set_config`]: Self::set_config
	pub fn with_config(mut self, config: DecorationConfig) -> Self {
		self.config = config;
		self
	}

	/// Disposes every engine and redecorates all visible documents.
	pub fn reset(&mut self) {
		debug!(documents = self.documents.len(), "decoration.manager.reset");
		for (_, mut engine) in self.documents.drain() {
			engine.dispose();
		}
		self.update_all_documents();
	}

	/// Swaps in new settings and rebuilds every engine.
	pub fn set_config(&mut self, config: DecorationConfig) {
		self.config = config;
		self.reset();
	}

	/// Redecorates `document` in full if it resolves to an engine.
	pub fn update_document(&mut self, document: &dyn TextDocument) {
		if let Some(engine) = self.resolve(document) {
			engine.trigger_update_decorations(document);
		}
	}

	pub fn on_did_open_text_document(&mut self, document: &dyn TextDocument) {
		self.update_document(document);
	}

	/// Forwards the ordered edits of one change event to the document's engine.
	pub fn on_did_change_text_document(&mut self, document: &dyn TextDocument, changes: &[ContentChange]) {
		if let Some(engine) = self.resolve(document) {
			trace!(
				uri = %document.uri(),
				change_count = changes.len(),
				"decoration.manager.doc_change"
			);
			engine.on_did_change_text_document(document, changes);
		}
	}

	pub fn on_did_close_text_document(&mut self, document: &dyn TextDocument) {
		self.dispose(&document.key());
	}

	/// Redecorates every document shown in a visible editor.
	pub fn update_all_documents(&mut self) {
		for document in self.host.visible_documents() {
			self.update_document(document.as_ref());
		}
	}

	/// Returns the engine for `document`, building it on first use.
	///
	/// Returns `None` for documents that are not decorated at all, for
	/// languages without a grammar, and when construction fails. Nothing is
	/// cached in those cases, so the next event tries again.
	pub fn resolve(&mut self, document: &dyn TextDocument) -> Option<&mut F::Engine> {
		if !is_valid_document(document) {
			trace!(
				uri = %document.uri(),
				lines = document.line_count(),
				"decoration.manager.skip_document"
			);
			return None;
		}

		match self.documents.entry(document.key()) {
			Entry::Occupied(entry) => Some(entry.into_mut()),
			Entry::Vacant(entry) => {
				match Self::build(&mut self.grammars, &self.config, &self.factory, document) {
					Ok(Some(engine)) => {
						debug!(
							key = %entry.key(),
							language = document.language_id(),
							"decoration.manager.create"
						);
						Some(entry.insert(engine))
					}
					Ok(None) => None,
					Err(err) => {
						warn!(uri = %document.uri(), error = %err, "decoration.manager.create_failed");
						if let Some(message) = err.user_message() {
							self.throttle
								.report(self.host.as_ref(), &format!("{ERROR_PREFIX}{message}"));
						}
						None
					}
				}
			}
		}
	}

	fn build(
		grammars: &mut GrammarGate,
		config: &DecorationConfig,
		factory: &F,
		document: &dyn TextDocument,
	) -> Result<Option<F::Engine>, DecorationError> {
		let grammar_id = grammar_id_for(document.language_id());
		if !grammars.ensure_available(grammar_id)? {
			trace!(
				language = document.language_id(),
				grammar = grammar_id,
				"decoration.manager.unsupported_language"
			);
			return Ok(None);
		}

		let settings = DecorationSettings::resolve(config, grammar_id, document.uri())?;
		Ok(Some(factory.create(document, settings)?))
	}

	/// Disposes the engine registered under `key`, if any.
	///
	/// Returns true if an engine was removed.
	pub fn dispose(&mut self, key: &DocumentKey) -> bool {
		let Some(mut engine) = self.documents.remove(key) else {
			return false;
		};
		engine.dispose();
		debug!(key = %key, "decoration.manager.dispose");
		true
	}

	pub fn is_tracked(&self, uri: &Url) -> bool {
		self.documents.contains_key(&DocumentKey::from_uri(uri))
	}

	pub fn engine(&self, uri: &Url) -> Option<&F::Engine> {
		self.documents.get(&DocumentKey::from_uri(uri))
	}

	pub fn document_count(&self) -> usize {
		self.documents.len()
	}

	pub fn config(&self) -> &DecorationConfig {
		&self.config
	}

	pub fn grammars(&self) -> &GrammarGate {
		&self.grammars
	}

	pub fn throttle(&self) -> &ErrorThrottle {
		&self.throttle
	}

	pub fn factory(&self) -> &F {
		&self.factory
	}
}
