//! Bridging loaders for grammars that are not compiled into the tokenizer.
//!
//! Each loader registers one grammar against the tokenizer core. Adding a
//! loadable grammar means adding an entry to [`BUILTIN_LOADERS`].

use crate::gate::GrammarLoader;
use crate::grammar::{GrammarDef, GrammarError};
use crate::tokenizer::TokenizerCore;

/// Loaders consulted by [`GrammarGate::new`](crate::GrammarGate::new).
pub const BUILTIN_LOADERS: &[(&str, GrammarLoader)] = &[("vue", load_vue as GrammarLoader)];

/// Vue single-file components: markup with embedded script and style blocks.
pub fn load_vue(core: &dyn TokenizerCore) -> Result<(), GrammarError> {
	core.register_grammar(
		GrammarDef::new("vue", "markup")
			.embedding("javascript")
			.embedding("css"),
	)
}
