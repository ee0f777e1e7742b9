//! Option table and the partially specified settings layer.

/// Value shape of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
	Bool,
	Int,
	String,
	/// One or more positional string arguments.
	StringList,
	/// A block of `pair "<open>" "<close>"` children.
	Pairs,
}

impl OptionType {
	pub fn name(self) -> &'static str {
		match self {
			OptionType::Bool => "bool",
			OptionType::Int => "int",
			OptionType::String => "string",
			OptionType::StringList => "string list",
			OptionType::Pairs => "pair block",
		}
	}
}

/// A known settings key.
#[derive(Debug)]
pub struct OptionDef {
	/// KDL node name.
	pub key: &'static str,
	pub value_type: OptionType,
}

pub const COLORS: &str = "colors";
pub const UNMATCHED_COLOR: &str = "unmatched-color";
pub const COLOR_MODE: &str = "color-mode";
pub const FORCE_UNIQUE_OPENING_COLOR: &str = "force-unique-opening-color";
pub const FORCE_ITERATION_COLOR_CYCLE: &str = "force-iteration-color-cycle";
pub const HIGHLIGHT_ACTIVE_SCOPE: &str = "highlight-active-scope";
pub const TIMEOUT: &str = "timeout";
pub const PAIRS: &str = "pairs";

pub static OPTIONS: &[OptionDef] = &[
	OptionDef { key: COLORS, value_type: OptionType::StringList },
	OptionDef { key: UNMATCHED_COLOR, value_type: OptionType::String },
	OptionDef { key: COLOR_MODE, value_type: OptionType::String },
	OptionDef { key: FORCE_UNIQUE_OPENING_COLOR, value_type: OptionType::Bool },
	OptionDef { key: FORCE_ITERATION_COLOR_CYCLE, value_type: OptionType::Bool },
	OptionDef { key: HIGHLIGHT_ACTIVE_SCOPE, value_type: OptionType::Bool },
	OptionDef { key: TIMEOUT, value_type: OptionType::Int },
	OptionDef { key: PAIRS, value_type: OptionType::Pairs },
];

/// Looks up an option by its KDL key.
pub fn find(key: &str) -> Option<&'static OptionDef> {
	OPTIONS.iter().find(|def| def.key == key)
}

/// Suggests the closest known option for a misspelled key.
pub fn suggest_option(key: &str) -> Option<String> {
	OPTIONS
		.iter()
		.map(|def| (def.key, strsim::jaro_winkler(key, def.key)))
		.filter(|(_, score)| *score > 0.8)
		.max_by(|a, b| a.1.total_cmp(&b.1))
		.map(|(key, _)| key.to_string())
}

/// A set of option overrides where unset options defer to lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsLayer {
	pub colors: Option<Vec<String>>,
	pub unmatched_color: Option<String>,
	pub color_mode: Option<String>,
	pub force_unique_opening_color: Option<bool>,
	pub force_iteration_color_cycle: Option<bool>,
	pub highlight_active_scope: Option<bool>,
	pub timeout_ms: Option<i64>,
	pub pairs: Option<Vec<(String, String)>>,
}

impl SettingsLayer {
	/// Applies every option set in `other` on top of `self`.
	pub fn overlay(&mut self, other: &SettingsLayer) {
		fn take<T: Clone>(dst: &mut Option<T>, src: &Option<T>) {
			if src.is_some() {
				dst.clone_from(src);
			}
		}

		take(&mut self.colors, &other.colors);
		take(&mut self.unmatched_color, &other.unmatched_color);
		take(&mut self.color_mode, &other.color_mode);
		take(&mut self.force_unique_opening_color, &other.force_unique_opening_color);
		take(&mut self.force_iteration_color_cycle, &other.force_iteration_color_cycle);
		take(&mut self.highlight_active_scope, &other.highlight_active_scope);
		take(&mut self.timeout_ms, &other.timeout_ms);
		take(&mut self.pairs, &other.pairs);
	}
}
