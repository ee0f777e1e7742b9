//! Failures raised while reading a settings file or resolving a snapshot.

use std::path::PathBuf;

use thiserror::Error;

/// Why a settings file was rejected or a document's settings did not resolve.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The settings file is not valid KDL.
	#[error("settings file is not valid KDL: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// The settings file could not be read.
	#[error("cannot read settings file {path}: {error}")]
	Io {
		/// Settings file location.
		path: PathBuf,
		error: std::io::Error,
	},

	/// A node lacks the argument it needs (a block name, an option value).
	#[error("missing {0}")]
	MissingField(String),

	/// A node names no known setting.
	#[error("unknown setting: {key}{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	UnknownOption {
		/// Node name as written.
		key: String,
		/// Closest known option, if any is similar enough.
		suggestion: Option<String>,
	},

	/// An option value has the wrong type.
	#[error("option '{option}' expects {expected}, got {got}")]
	OptionTypeMismatch {
		/// The option key.
		option: String,
		/// Expected value type.
		expected: &'static str,
		/// Actual value type.
		got: &'static str,
	},

	/// A `scope` glob could not be compiled.
	#[error("invalid scope pattern '{pattern}': {error}")]
	InvalidScope {
		/// The offending glob.
		pattern: String,
		/// The underlying glob error.
		error: globset::Error,
	},

	/// A color value could not be parsed.
	#[error("invalid color format: {0}")]
	InvalidColor(String),

	/// The color list resolved to nothing.
	#[error("colors must contain at least one color")]
	NoColors,

	/// A color mode value is invalid.
	#[error("invalid color mode: {0} (expected 'consecutive' or 'independent')")]
	InvalidColorMode(String),

	/// A bracket pair is malformed.
	#[error("invalid bracket pair {index}: {reason}")]
	InvalidPair {
		/// Position of the pair in the resolved list.
		index: usize,
		/// What is wrong with it.
		reason: &'static str,
	},

	/// The pair list resolved to nothing.
	#[error("pairs must contain at least one bracket pair")]
	NoPairs,

	/// The debounce timeout is out of range.
	#[error("timeout {0}ms is out of range (0..={max})", max = crate::settings::MAX_TIMEOUT_MS)]
	InvalidTimeout(i64),
}

/// Result of reading or resolving settings.
pub type Result<T> = std::result::Result<T, ConfigError>;
