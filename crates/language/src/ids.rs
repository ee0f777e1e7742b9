//! Editor language ids to tokenizer grammar ids.
//!
//! Editors and tokenizers name a handful of languages differently. Anything
//! not listed here is passed through untouched and left for the
//! [`GrammarGate`](crate::GrammarGate) to accept or reject.

/// `(editor language id, grammar id)` pairs that differ between the two.
pub const LANGUAGE_ALIASES: &[(&str, &str)] = &[
	("javascriptreact", "jsx"),
	("typescriptreact", "tsx"),
	("jsonc", "json5"),
	("scad", "json"),
	("vb", "vbnet"),
];

/// Returns the grammar id the tokenizer expects for an editor language id.
pub fn grammar_id_for(language_id: &str) -> &str {
	LANGUAGE_ALIASES
		.iter()
		.find(|(editor, _)| *editor == language_id)
		.map_or(language_id, |(_, grammar)| grammar)
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("javascriptreact", "jsx")]
	#[case("typescriptreact", "tsx")]
	#[case("jsonc", "json5")]
	#[case("scad", "json")]
	#[case("vb", "vbnet")]
	#[case("python", "python")]
	#[case("", "")]
	fn maps_editor_ids(#[case] language_id: &str, #[case] expected: &str) {
		assert_eq!(grammar_id_for(language_id), expected);
	}

	#[test]
	fn mapping_is_case_sensitive() {
		assert_eq!(grammar_id_for("JavaScriptReact"), "JavaScriptReact");
	}

	#[test]
	fn alias_keys_are_disjoint() {
		for (i, (a, _)) in LANGUAGE_ALIASES.iter().enumerate() {
			for (b, _) in &LANGUAGE_ALIASES[i + 1..] {
				assert_ne!(a, b);
			}
		}
	}
}
