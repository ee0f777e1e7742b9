use std::fmt;

use url::Url;

/// Registry key for an open document.
///
/// Built from the canonical serialization of the document URI, so every
/// event referring to the same document maps to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentKey(String);

impl DocumentKey {
	pub fn from_uri(uri: &Url) -> Self {
		Self(uri.as_str().to_owned())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&Url> for DocumentKey {
	fn from(uri: &Url) -> Self {
		Self::from_uri(uri)
	}
}

impl fmt::Display for DocumentKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn equivalent_uris_share_a_key() {
		let a = Url::parse("FILE:///tmp/./src/../main.rs").unwrap();
		let b = Url::parse("file:///tmp/main.rs").unwrap();
		assert_eq!(DocumentKey::from_uri(&a), DocumentKey::from_uri(&b));
	}

	#[test]
	fn distinct_schemes_are_distinct_documents() {
		let file = Url::parse("file:///tmp/a.rs").unwrap();
		let untitled = Url::parse("untitled:/tmp/a.rs").unwrap();
		assert_ne!(DocumentKey::from(&file), DocumentKey::from(&untitled));
	}

	#[test]
	fn display_matches_uri() {
		let uri = Url::parse("untitled:Untitled-1").unwrap();
		assert_eq!(DocumentKey::from_uri(&uri).to_string(), "untitled:Untitled-1");
	}
}
