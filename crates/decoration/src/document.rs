//! Host document view.

use pairlight_primitives::{DocumentKey, Url};
use ropey::RopeSlice;

/// URI schemes whose documents get decorations: local files, unsaved
/// buffers and collaborative sessions.
pub const SUPPORTED_SCHEMES: &[&str] = &["file", "untitled", "vsls"];

/// Read-only view of a document as reported by the host editor.
pub trait TextDocument {
	fn uri(&self) -> &Url;

	fn line_count(&self) -> usize;

	/// Language id as the editor names it (e.g. `javascriptreact`).
	fn language_id(&self) -> &str;

	/// Current content, read by engines when they redecorate.
	fn text(&self) -> RopeSlice<'_>;

	fn key(&self) -> DocumentKey {
		DocumentKey::from_uri(self.uri())
	}
}

/// Returns true if `document` should be decorated at all.
///
/// Empty documents and documents outside [`SUPPORTED_SCHEMES`] (output
/// panels, debug consoles, git views) are skipped.
pub fn is_valid_document(document: &dyn TextDocument) -> bool {
	let scheme = document.uri().scheme();
	document.line_count() > 0 && SUPPORTED_SCHEMES.iter().any(|s| *s == scheme)
}
