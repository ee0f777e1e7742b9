//! Decoration settings.
//!
//! Settings are written in KDL (v2) and layered from least to most specific:
//!
//! 1. built-in defaults
//! 2. top-level options (global scope)
//! 3. `scope "<glob>" { }` blocks whose glob matches the document path, in file order
//! 4. the `language "<grammar>" { }` block for the document's grammar
//!
//! ```kdl
//! colors "Gold" "Orchid" "LightSkyBlue"
//! unmatched-color "Red"
//! color-mode "consecutive"
//! timeout 200
//! pairs {
//!     pair "(" ")"
//!     pair "[" "]"
//!     pair "{" "}"
//! }
//!
//! language "jsx" {
//!     colors "Gold" "Orchid"
//! }
//!
//! scope "**/vendor/**" {
//!     highlight-active-scope #true
//! }
//! ```
//!
//! Parsing checks syntax, option names and value types. Semantic validation
//! (color formats, pair shapes, ranges) happens when a per-document
//! [`DecorationSettings`] snapshot is resolved, so one bad override only
//! affects the documents it applies to.

pub mod error;
pub mod options;
mod parse;
pub mod settings;

use std::path::Path;

use globset::GlobMatcher;

pub use error::{ConfigError, Result};
pub use options::SettingsLayer;
pub use settings::{BracketPair, ColorMode, DecorationSettings};

/// Parsed settings document.
#[derive(Debug, Clone, Default)]
pub struct DecorationConfig {
	/// Top-level option overrides.
	pub global: SettingsLayer,
	/// Path-scoped overrides, in file order.
	pub scopes: Vec<ScopeOverride>,
	/// Per-grammar overrides.
	pub languages: Vec<LanguageOverride>,
}

/// Per-grammar option overrides.
#[derive(Debug, Clone)]
pub struct LanguageOverride {
	/// Grammar id (e.g., "jsx", "python").
	pub grammar: String,
	/// Option overrides for this grammar.
	pub layer: SettingsLayer,
}

/// Option overrides for documents whose path matches a glob.
#[derive(Debug, Clone)]
pub struct ScopeOverride {
	/// Glob as written in the settings file.
	pub pattern: String,
	/// Option overrides for matching documents.
	pub layer: SettingsLayer,
	matcher: GlobMatcher,
}

impl ScopeOverride {
	pub fn new(pattern: &str, layer: SettingsLayer) -> Result<Self> {
		let matcher = globset::Glob::new(pattern)
			.map_err(|error| ConfigError::InvalidScope {
				pattern: pattern.to_string(),
				error,
			})?
			.compile_matcher();
		Ok(Self {
			pattern: pattern.to_string(),
			layer,
			matcher,
		})
	}

	pub fn matches(&self, path: &Path) -> bool {
		self.matcher.is_match(path)
	}
}

impl DecorationConfig {
	/// Parse a KDL string into a [`DecorationConfig`].
	pub fn parse(input: &str) -> Result<Self> {
		parse::parse_config_str(input)
	}

	/// Load settings from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Merge another settings document into this one.
	///
	/// Values from `other` override values in `self`; scopes and language
	/// blocks from `other` are appended so they apply after the existing ones.
	pub fn merge(&mut self, other: DecorationConfig) {
		self.global.overlay(&other.global);
		self.scopes.extend(other.scopes);
		self.languages.extend(other.languages);
	}

	/// Returns the merged override layer for `grammar`, if any block names it.
	pub fn language(&self, grammar: &str) -> Option<SettingsLayer> {
		let mut found = None::<SettingsLayer>;
		for lang in self.languages.iter().filter(|l| l.grammar == grammar) {
			found.get_or_insert_with(SettingsLayer::default).overlay(&lang.layer);
		}
		found
	}
}
