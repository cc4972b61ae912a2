//! Placeholder glyphs and the final row pass that resolves them.
//!
//! The painter never writes line-drawing characters directly. It writes a
//! [`Tile`] into a single cell, which keeps width arithmetic at one cell per
//! placeholder whatever the final glyph is. [`resolve_row`] swaps each tile
//! for its glyph once the row is complete.

use alloc::string::String;

/// Line-drawing placeholders used at the ends of alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    CornerUpperLeft,
    CornerUpperRight,
    CornerLowerLeft,
    CornerLowerRight,
    Junction,
    Pipe,
}

impl Tile {
    /// Final text for this tile.
    pub const fn glyph(self) -> &'static str {
        match self {
            Tile::ArrowUp => "^",
            Tile::ArrowDown => "v",
            Tile::ArrowLeft => "<",
            Tile::ArrowRight => ">",
            Tile::CornerUpperLeft => ",",
            Tile::CornerUpperRight => ".",
            Tile::CornerLowerLeft => "`",
            Tile::CornerLowerRight => "'",
            Tile::Junction => "+",
            Tile::Pipe => "|",
        }
    }
}

/// One canvas cell: a plain byte or an unresolved tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Byte(u8),
    Tile(Tile),
}

impl Cell {
    pub const BLANK: Cell = Cell::Byte(b' ');

    /// Tiles are never whitespace, so a trailing tile survives trimming.
    pub const fn is_whitespace(self) -> bool {
        match self {
            Cell::Byte(b) => b.is_ascii_whitespace(),
            Cell::Tile(_) => false,
        }
    }
}

/// The row with trailing whitespace cells removed.
pub fn trim_row(row: &[Cell]) -> &[Cell] {
    let end = row
        .iter()
        .rposition(|c| !c.is_whitespace())
        .map_or(0, |i| i + 1);
    &row[..end]
}

/// Replace every tile in `row` by its glyph; bytes pass through unchanged.
pub fn resolve_row(row: &[Cell]) -> String {
    let mut line = String::with_capacity(row.len());
    for cell in row {
        match *cell {
            Cell::Byte(b) => line.push(char::from(b)),
            Cell::Tile(tile) => line.push_str(tile.glyph()),
        }
    }
    line
}
