//! KDL parsing for settings documents.

use kdl::{KdlDocument, KdlNode, KdlValue};
use tracing::trace;

use crate::options::{self, OptionType, SettingsLayer};
use crate::{ConfigError, DecorationConfig, LanguageOverride, Result, ScopeOverride};

/// Parse a KDL string into a [`DecorationConfig`].
pub(crate) fn parse_config_str(input: &str) -> Result<DecorationConfig> {
	let doc: KdlDocument = input.parse()?;
	let mut config = DecorationConfig::default();

	for node in doc.nodes() {
		match node.name().value() {
			"language" => {
				let grammar = string_arg(node, "language")?;
				let layer = parse_layer(node.children())?;
				trace!(grammar = %grammar, "config.parse.language");
				config.languages.push(LanguageOverride { grammar, layer });
			}
			"scope" => {
				let pattern = string_arg(node, "scope")?;
				let layer = parse_layer(node.children())?;
				trace!(pattern = %pattern, "config.parse.scope");
				config.scopes.push(ScopeOverride::new(&pattern, layer)?);
			}
			_ => parse_option(node, &mut config.global)?,
		}
	}

	Ok(config)
}

fn parse_layer(children: Option<&KdlDocument>) -> Result<SettingsLayer> {
	let mut layer = SettingsLayer::default();
	let Some(children) = children else {
		return Ok(layer);
	};
	for node in children.nodes() {
		parse_option(node, &mut layer)?;
	}
	Ok(layer)
}

fn parse_option(node: &KdlNode, layer: &mut SettingsLayer) -> Result<()> {
	let key = node.name().value();
	let Some(def) = options::find(key) else {
		return Err(ConfigError::UnknownOption {
			key: key.to_string(),
			suggestion: options::suggest_option(key),
		});
	};

	match def.value_type {
		OptionType::Bool => {
			let value = typed_arg(node, key, def.value_type, KdlValue::as_bool)?;
			match key {
				options::FORCE_UNIQUE_OPENING_COLOR => layer.force_unique_opening_color = Some(value),
				options::FORCE_ITERATION_COLOR_CYCLE => layer.force_iteration_color_cycle = Some(value),
				_ => layer.highlight_active_scope = Some(value),
			}
		}
		OptionType::Int => {
			let value = typed_arg(node, key, def.value_type, KdlValue::as_integer)?;
			// Out-of-range values saturate toward their sign and fail validation later.
			let saturated = if value < 0 { i64::MIN } else { i64::MAX };
			layer.timeout_ms = Some(i64::try_from(value).unwrap_or(saturated));
		}
		OptionType::String => {
			let value = typed_arg(node, key, def.value_type, |v| v.as_string().map(String::from))?;
			match key {
				options::UNMATCHED_COLOR => layer.unmatched_color = Some(value),
				_ => layer.color_mode = Some(value),
			}
		}
		OptionType::StringList => {
			let values = positional(node)
				.map(|v| {
					v.as_string().map(String::from).ok_or_else(|| ConfigError::OptionTypeMismatch {
						option: key.to_string(),
						expected: def.value_type.name(),
						got: value_type_name(v),
					})
				})
				.collect::<Result<Vec<_>>>()?;
			layer.colors = Some(values);
		}
		OptionType::Pairs => layer.pairs = Some(parse_pairs(node)?),
	}

	Ok(())
}

fn parse_pairs(node: &KdlNode) -> Result<Vec<(String, String)>> {
	let Some(children) = node.children() else {
		return Err(ConfigError::OptionTypeMismatch {
			option: options::PAIRS.to_string(),
			expected: OptionType::Pairs.name(),
			got: node.get(0).map_or("nothing", value_type_name),
		});
	};

	children
		.nodes()
		.iter()
		.map(|pair| {
			if pair.name().value() != "pair" {
				return Err(ConfigError::UnknownOption {
					key: pair.name().value().to_string(),
					suggestion: Some("pair".to_string()),
				});
			}
			let mut tokens = positional(pair);
			let mut token = |what: &str| -> Result<String> {
				let value = tokens
					.next()
					.ok_or_else(|| ConfigError::MissingField(format!("pair {what} token")))?;
				value.as_string().map(String::from).ok_or_else(|| ConfigError::OptionTypeMismatch {
					option: "pair".to_string(),
					expected: "string",
					got: value_type_name(value),
				})
			};
			let open = token("open")?;
			let close = token("close")?;
			Ok((open, close))
		})
		.collect()
}

/// Positional (unnamed) argument values of a node.
fn positional(node: &KdlNode) -> impl Iterator<Item = &KdlValue> {
	node.entries()
		.iter()
		.filter(|e| e.name().is_none())
		.map(|e| e.value())
}

fn string_arg(node: &KdlNode, what: &str) -> Result<String> {
	positional(node)
		.next()
		.and_then(|v| v.as_string())
		.map(String::from)
		.ok_or_else(|| ConfigError::MissingField(format!("{what} name")))
}

fn typed_arg<T>(
	node: &KdlNode,
	key: &str,
	expected: OptionType,
	extract: impl Fn(&KdlValue) -> Option<T>,
) -> Result<T> {
	let value = positional(node)
		.next()
		.ok_or_else(|| ConfigError::MissingField(format!("{key} value")))?;
	extract(value).ok_or_else(|| ConfigError::OptionTypeMismatch {
		option: key.to_string(),
		expected: expected.name(),
		got: value_type_name(value),
	})
}

fn value_type_name(value: &KdlValue) -> &'static str {
	match value {
		KdlValue::String(_) => "string",
		KdlValue::Integer(_) => "int",
		KdlValue::Float(_) => "float",
		KdlValue::Bool(_) => "bool",
		KdlValue::Null => "null",
	}
}
