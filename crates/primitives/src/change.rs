/// Position in line/character coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
	/// Zero-based line index.
	pub line: u32,
	/// Zero-based character offset in the line.
	pub character: u32,
}

impl Position {
	/// Creates a new position.
	pub const fn new(line: u32, character: u32) -> Self {
		Self { line, character }
	}
}

/// Range with start and end positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
	/// Start position (inclusive).
	pub start: Position,
	/// End position (exclusive).
	pub end: Position,
}

impl Range {
	/// Creates a new range.
	pub const fn new(start: Position, end: Position) -> Self {
		Self { start, end }
	}

	/// Creates a zero-length range at a position.
	pub const fn point(pos: Position) -> Self {
		Self {
			start: pos,
			end: pos,
		}
	}
}

/// A single edit reported by the host for one document version bump.
///
/// Changes arrive ordered; each `range` is expressed in the coordinates of
/// the document as it was before that change was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChange {
	/// The range that was replaced.
	pub range: Range,
	/// Offset of the replaced range in characters.
	pub range_offset: usize,
	/// Length of the replaced range in characters.
	pub range_length: usize,
	/// The text that replaced the range.
	pub text: String,
}

impl ContentChange {
	/// Creates a change replacing `range` with `text`.
	pub fn new(range: Range, range_offset: usize, range_length: usize, text: impl Into<String>) -> Self {
		Self {
			range,
			range_offset,
			range_length,
			text: text.into(),
		}
	}

	/// Creates a pure insertion at `pos`.
	pub fn insert(pos: Position, offset: usize, text: impl Into<String>) -> Self {
		Self::new(Range::point(pos), offset, 0, text)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn insert_is_point_range() {
		let change = ContentChange::insert(Position::new(2, 4), 17, "{}");
		assert_eq!(change.range, Range::point(Position::new(2, 4)));
		assert_eq!(change.range_offset, 17);
		assert_eq!(change.range_length, 0);
		assert_eq!(change.text, "{}");
	}

	#[test]
	fn positions_order_by_line_then_character() {
		assert!(Position::new(1, 9) < Position::new(2, 0));
		assert!(Position::new(2, 0) < Position::new(2, 1));
	}
}
