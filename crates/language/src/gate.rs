//! Grammar availability gate.
//!
//! Keeps the grow-only set of grammar ids the tokenizer can handle. A miss
//! consults a small table of bridging loaders; a grammar outside that table
//! is simply unsupported.

use std::fmt;
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::bridge::BUILTIN_LOADERS;
use crate::grammar::GrammarError;
use crate::tokenizer::TokenizerCore;

/// Registers one external grammar with the tokenizer core.
pub type GrammarLoader = fn(&dyn TokenizerCore) -> Result<(), GrammarError>;

/// Availability set plus the loaders that may grow it.
///
/// Grammar ids are only ever added. Once [`ensure_available`] has answered
/// `true` for an id it answers `true` again without touching the loader.
///
/// [`ensure_available`]: GrammarGate::ensure_available
pub struct GrammarGate {
	core: Arc<dyn TokenizerCore>,
	available: FxHashSet<String>,
	loaders: FxHashMap<&'static str, GrammarLoader>,
}

impl fmt::Debug for GrammarGate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("GrammarGate")
			.field("available", &self.available.len())
			.field("loaders", &self.loaders.keys().collect::<Vec<_>>())
			.finish()
	}
}

impl GrammarGate {
	/// Creates a gate over `core` with the [`BUILTIN_LOADERS`] table.
	pub fn new(core: Arc<dyn TokenizerCore>) -> Self {
		Self::with_loaders(core, BUILTIN_LOADERS.iter().copied())
	}

	/// Creates a gate over `core` with a custom loader table.
	///
	/// The availability set is seeded from the core's grammar inventory.
	pub fn with_loaders(
		core: Arc<dyn TokenizerCore>,
		loaders: impl IntoIterator<Item = (&'static str, GrammarLoader)>,
	) -> Self {
		let available: FxHashSet<String> = core.grammars().into_iter().collect();
		let loaders: FxHashMap<_, _> = loaders.into_iter().collect();
		debug!(grammars = available.len(), loaders = loaders.len(), "language.gate.init");
		Self {
			core,
			available,
			loaders,
		}
	}

	/// Returns true if `grammar` is usable, loading it on first demand.
	///
	/// Loader errors are returned as-is and leave the grammar unavailable, so
	/// the next call runs the loader again.
	pub fn ensure_available(&mut self, grammar: &str) -> Result<bool, GrammarError> {
		if self.available.contains(grammar) {
			return Ok(true);
		}

		let Some(loader) = self.loaders.get(grammar) else {
			trace!(grammar, "language.gate.unsupported");
			return Ok(false);
		};

		// Someone else may have registered it since the inventory was read.
		if self.core.has_grammar(grammar) {
			debug!(grammar, "language.gate.already_registered");
		} else {
			debug!(grammar, "language.gate.load_external");
			loader(self.core.as_ref())?;
		}
		self.available.insert(grammar.to_owned());
		Ok(true)
	}

	pub fn is_available(&self, grammar: &str) -> bool {
		self.available.contains(grammar)
	}

	/// Returns true if a bridging loader exists for `grammar`.
	pub fn is_loadable(&self, grammar: &str) -> bool {
		self.loaders.contains_key(grammar)
	}

	pub fn available_count(&self) -> usize {
		self.available.len()
	}
}

#[cfg(test)]
mod tests;
