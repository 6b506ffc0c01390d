//! Shared row geometry.
//!
//! Both engines draw one item per terminal line: a colored swatch, a gap,
//! then the item text.

/// Height of each item row in lines.
pub const ROW_HEIGHT: u16 = 1;

/// Width of the colored swatch at the start of each row.
pub const SWATCH_WIDTH: u16 = 3;

/// Column where row text starts, relative to the row.
pub const TEXT_OFFSET: u16 = SWATCH_WIDTH + 1;

/// Minimum width for a row to be drawn at all.
pub const MIN_ROW_WIDTH: u16 = TEXT_OFFSET + 1;
