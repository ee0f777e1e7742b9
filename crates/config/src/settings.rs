//! Per-document settings snapshots.

use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::options::SettingsLayer;
use crate::{ConfigError, DecorationConfig, Result};

/// Upper bound for the engine debounce timeout.
pub const MAX_TIMEOUT_MS: i64 = 10_000;

pub const DEFAULT_COLORS: &[&str] = &["Gold", "Orchid", "LightSkyBlue"];
pub const DEFAULT_UNMATCHED_COLOR: &str = "Red";
pub const DEFAULT_TIMEOUT_MS: i64 = 200;
pub const DEFAULT_PAIRS: &[(&str, &str)] = &[("(", ")"), ("[", "]"), ("{", "}")];

/// How colors are assigned to nested pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
	/// All bracket kinds share one color cycle.
	#[default]
	Consecutive,
	/// Each bracket kind cycles through colors on its own.
	Independent,
}

impl ColorMode {
	fn parse(s: &str) -> Result<Self> {
		match s.to_lowercase().as_str() {
			"consecutive" => Ok(ColorMode::Consecutive),
			"independent" => Ok(ColorMode::Independent),
			other => Err(ConfigError::InvalidColorMode(other.to_string())),
		}
	}
}

/// An opening/closing bracket token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketPair {
	pub open: String,
	pub close: String,
}

/// Settings snapshot for one document.
///
/// Resolved once when a decoration engine is built and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorationSettings {
	/// Grammar id the snapshot was resolved for.
	pub grammar_id: String,
	pub colors: Vec<String>,
	pub unmatched_color: String,
	pub color_mode: ColorMode,
	pub force_unique_opening_color: bool,
	pub force_iteration_color_cycle: bool,
	pub highlight_active_scope: bool,
	/// Debounce applied by the engine before re-tokenizing.
	pub timeout: Duration,
	pub pairs: Vec<BracketPair>,
}

impl DecorationSettings {
	/// Resolves the snapshot for a document with grammar `grammar_id` at `uri`.
	pub fn resolve(config: &DecorationConfig, grammar_id: &str, uri: &Url) -> Result<Self> {
		let path = document_path(uri);
		let mut layer = config.global.clone();
		for scope in config.scopes.iter().filter(|s| s.matches(&path)) {
			debug!(pattern = %scope.pattern, path = %path.display(), "config.settings.scope_match");
			layer.overlay(&scope.layer);
		}
		if let Some(language) = config.language(grammar_id) {
			layer.overlay(&language);
		}
		Self::from_layer(grammar_id, layer)
	}

	/// Fills unset options with defaults and validates the result.
	pub fn from_layer(grammar_id: &str, layer: SettingsLayer) -> Result<Self> {
		let colors = layer
			.colors
			.unwrap_or_else(|| DEFAULT_COLORS.iter().map(|c| c.to_string()).collect());
		if colors.is_empty() {
			return Err(ConfigError::NoColors);
		}
		for color in &colors {
			validate_color(color)?;
		}

		let unmatched_color = layer
			.unmatched_color
			.unwrap_or_else(|| DEFAULT_UNMATCHED_COLOR.to_string());
		validate_color(&unmatched_color)?;

		let color_mode = layer
			.color_mode
			.as_deref()
			.map(ColorMode::parse)
			.transpose()?
			.unwrap_or_default();

		let timeout_ms = layer.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS);
		if !(0..=MAX_TIMEOUT_MS).contains(&timeout_ms) {
			return Err(ConfigError::InvalidTimeout(timeout_ms));
		}

		let pairs: Vec<BracketPair> = match layer.pairs {
			Some(pairs) => pairs
				.into_iter()
				.map(|(open, close)| BracketPair { open, close })
				.collect(),
			None => DEFAULT_PAIRS
				.iter()
				.map(|(open, close)| BracketPair {
					open: open.to_string(),
					close: close.to_string(),
				})
				.collect(),
		};
		validate_pairs(&pairs)?;

		Ok(Self {
			grammar_id: grammar_id.to_string(),
			colors,
			unmatched_color,
			color_mode,
			force_unique_opening_color: layer.force_unique_opening_color.unwrap_or(false),
			force_iteration_color_cycle: layer.force_iteration_color_cycle.unwrap_or(false),
			highlight_active_scope: layer.highlight_active_scope.unwrap_or(false),
			timeout: Duration::from_millis(timeout_ms as u64),
			pairs,
		})
	}
}

/// Path used for `scope` matching: the file path for `file` URIs, the URI
/// path for everything else.
fn document_path(uri: &Url) -> PathBuf {
	if uri.scheme() == "file" {
		if let Ok(path) = uri.to_file_path() {
			return path;
		}
	}
	PathBuf::from(uri.path())
}

/// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa` and alphabetic color names.
fn validate_color(color: &str) -> Result<()> {
	let valid = match color.strip_prefix('#') {
		Some(hex) => matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit()),
		None => !color.is_empty() && color.chars().all(|c| c.is_ascii_alphabetic()),
	};
	if valid {
		Ok(())
	} else {
		Err(ConfigError::InvalidColor(color.to_string()))
	}
}

fn validate_pairs(pairs: &[BracketPair]) -> Result<()> {
	if pairs.is_empty() {
		return Err(ConfigError::NoPairs);
	}
	for (index, pair) in pairs.iter().enumerate() {
		if pair.open.is_empty() || pair.close.is_empty() {
			return Err(ConfigError::InvalidPair {
				index,
				reason: "open and close tokens must not be empty",
			});
		}
		if pair.open == pair.close {
			return Err(ConfigError::InvalidPair {
				index,
				reason: "open and close tokens must differ",
			});
		}
		if pairs[..index].iter().any(|p| p.open == pair.open) {
			return Err(ConfigError::InvalidPair {
				index,
				reason: "open token is already used by another pair",
			});
		}
	}
	Ok(())
}
