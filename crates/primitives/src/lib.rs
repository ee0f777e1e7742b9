//! Core types shared by the decoration crates: document identity and
//! content-change records.

/// Content-change records in line/character coordinates.
pub mod change;
/// Canonical document identity.
pub mod document;

pub use change::{ContentChange, Position, Range};
pub use document::DocumentKey;
pub use url::Url;
