//! Tokenizer capability.
//!
//! The tokenizer itself lives outside this workspace. The decoration core only
//! needs its grammar inventory and a way to register bridged grammars, which
//! is what [`TokenizerCore`] captures.

use parking_lot::RwLock;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::grammar::{GrammarDef, GrammarError};

/// Grammar ids compiled into the default tokenizer catalog.
pub const BUILTIN_GRAMMARS: &[&str] = &[
	"markup", "html", "xml", "svg", "mathml", "css", "clike", "javascript", "jsx", "typescript",
	"tsx", "json", "json5", "c", "cpp", "csharp", "java", "kotlin", "scala", "go", "rust",
	"python", "ruby", "php", "perl", "lua", "bash", "powershell", "batch", "sql", "yaml", "toml",
	"ini", "markdown", "latex", "scss", "less", "sass", "stylus", "haskell", "elm", "ocaml",
	"fsharp", "clojure", "lisp", "scheme", "racket", "erlang", "elixir", "dart", "swift",
	"objectivec", "r", "julia", "matlab", "vbnet", "pascal", "fortran", "groovy", "graphql",
	"docker", "nginx", "makefile", "protobuf", "solidity", "zig", "nim", "crystal", "d", "haxe",
	"glsl", "hlsl", "verilog", "vhdl", "prolog", "smalltalk", "tcl", "twig", "handlebars", "pug",
];

/// Capability surface of the tokenizer library.
pub trait TokenizerCore: Send + Sync {
	/// Grammar ids currently usable by the tokenizer.
	fn grammars(&self) -> Vec<String>;

	/// Returns true if `grammar` is usable right now.
	fn has_grammar(&self, grammar: &str) -> bool {
		self.grammars().iter().any(|g| g == grammar)
	}

	/// Registers an externally supplied grammar.
	fn register_grammar(&self, def: GrammarDef) -> Result<(), GrammarError>;
}

/// In-memory tokenizer catalog seeded with [`BUILTIN_GRAMMARS`].
#[derive(Debug)]
pub struct GrammarCatalog {
	grammars: RwLock<FxHashSet<String>>,
}

impl Default for GrammarCatalog {
	fn default() -> Self {
		Self::with_grammars(BUILTIN_GRAMMARS.iter().copied())
	}
}

impl GrammarCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a catalog holding exactly `grammars`.
	pub fn with_grammars<'a>(grammars: impl IntoIterator<Item = &'a str>) -> Self {
		Self {
			grammars: RwLock::new(grammars.into_iter().map(str::to_owned).collect()),
		}
	}

	pub fn contains(&self, grammar: &str) -> bool {
		self.grammars.read().contains(grammar)
	}

	pub fn len(&self) -> usize {
		self.grammars.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.grammars.read().is_empty()
	}
}

impl TokenizerCore for GrammarCatalog {
	fn grammars(&self) -> Vec<String> {
		let mut grammars: Vec<_> = self.grammars.read().iter().cloned().collect();
		grammars.sort_unstable();
		grammars
	}

	fn has_grammar(&self, grammar: &str) -> bool {
		self.contains(grammar)
	}

	fn register_grammar(&self, def: GrammarDef) -> Result<(), GrammarError> {
		let mut grammars = self.grammars.write();

		if grammars.contains(&def.id) {
			return Err(GrammarError::AlreadyRegistered(def.id));
		}
		if !grammars.contains(&def.base) {
			return Err(GrammarError::MissingBase {
				grammar: def.id,
				base: def.base,
			});
		}
		if let Some(missing) = def.embedded.iter().find(|g| !grammars.contains(*g)) {
			return Err(GrammarError::MissingEmbedded {
				embedded: missing.clone(),
				grammar: def.id,
			});
		}

		debug!(grammar = %def.id, base = %def.base, embedded = ?def.embedded, "language.catalog.register");
		grammars.insert(def.id);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn default_catalog_holds_builtins() {
		let catalog = GrammarCatalog::new();
		assert_eq!(catalog.len(), BUILTIN_GRAMMARS.len());
		assert!(catalog.contains("jsx"));
		assert!(catalog.contains("vbnet"));
		assert!(!catalog.contains("vue"));
	}

	#[test]
	fn register_requires_base() {
		let catalog = GrammarCatalog::with_grammars(["css"]);
		let err = catalog.register_grammar(GrammarDef::new("vue", "markup")).unwrap_err();
		assert_eq!(
			err,
			GrammarError::MissingBase {
				grammar: "vue".into(),
				base: "markup".into(),
			}
		);
		assert!(!catalog.contains("vue"));
	}

	#[test]
	fn register_requires_embedded() {
		let catalog = GrammarCatalog::with_grammars(["markup", "css"]);
		let def = GrammarDef::new("vue", "markup").embedding("css").embedding("javascript");
		let err = catalog.register_grammar(def).unwrap_err();
		assert_eq!(
			err,
			GrammarError::MissingEmbedded {
				grammar: "vue".into(),
				embedded: "javascript".into(),
			}
		);
	}

	#[test]
	fn register_rejects_duplicates() {
		let catalog = GrammarCatalog::with_grammars(["markup"]);
		catalog.register_grammar(GrammarDef::new("vue", "markup")).unwrap();
		assert_eq!(
			catalog.register_grammar(GrammarDef::new("vue", "markup")),
			Err(GrammarError::AlreadyRegistered("vue".into()))
		);
		assert_eq!(catalog.grammars(), vec!["markup".to_string(), "vue".to_string()]);
	}
}
