//! Character grid with a write cursor.
//!
//! The painter only ever writes at the cursor and moves it relative to a saved
//! [`Cursor`]. Every write is bounds-checked: a write that would leave the grid
//! is reported as [`RenderError::WriteOverflow`] and nothing is written.

use alloc::{string::String, vec, vec::Vec};

use super::tile::{resolve_row, trim_row, Cell, Tile};
use crate::error::{RenderError, Result};
use crate::text::escape_into;

/// A saved cursor position.
///
/// Coordinates are signed so that a malformed tree which walks above row 0
/// surfaces as an overflow on its next write rather than an arithmetic panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: isize,
    pub y: isize,
}

impl Cursor {
    pub const fn new(x: usize, y: usize) -> Self {
        Self {
            x: x as isize,
            y: y as isize,
        }
    }

    pub const fn right(self, n: usize) -> Self {
        Self {
            x: self.x + n as isize,
            y: self.y,
        }
    }

    pub const fn down(self, n: usize) -> Self {
        Self {
            x: self.x,
            y: self.y + n as isize,
        }
    }

    pub const fn up(self, n: usize) -> Self {
        Self {
            x: self.x,
            y: self.y - n as isize,
        }
    }
}

/// The grid one rule is painted onto.
///
/// Allocated once per rule at its final size; it never grows.
#[derive(Debug)]
pub struct Canvas {
    rows: Vec<Vec<Cell>>,
    width: usize,
    scratch: Vec<u8>,
    cursor: Cursor,
}

impl Canvas {
    /// A `width` x `height` grid of spaces with the cursor at the origin.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![Cell::BLANK; width]; height],
            width,
            scratch: Vec::with_capacity(width),
            cursor: Cursor::default(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Put the cursor back at a previously saved position.
    pub fn restore(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    /// Move right without writing.
    pub fn advance(&mut self, n: usize) {
        self.cursor = self.cursor.right(n);
    }

    /// Copy `bytes` into the current row and advance past them.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let cells = self.span(bytes.len())?;
        for (cell, &b) in cells.iter_mut().zip(bytes) {
            *cell = Cell::Byte(b);
        }
        self.advance(bytes.len());
        Ok(())
    }

    /// Write `n` copies of `byte`.
    pub fn write_repeat(&mut self, byte: u8, n: usize) -> Result<()> {
        self.span(n)?.fill(Cell::Byte(byte));
        self.advance(n);
        Ok(())
    }

    pub fn write_tile(&mut self, tile: Tile) -> Result<()> {
        self.span(1)?[0] = Cell::Tile(tile);
        self.advance(1);
        Ok(())
    }

    /// Write `bytes` escaped, without quotes.
    pub fn write_escaped(&mut self, bytes: &[u8]) -> Result<()> {
        let mut scratch = core::mem::take(&mut self.scratch);
        scratch.clear();
        escape_into(bytes, &mut scratch);
        let written = self.write_bytes(&scratch);
        self.scratch = scratch;
        written
    }

    /// Write `bytes` escaped and wrapped in `quote`.
    pub fn write_quoted(&mut self, quote: u8, bytes: &[u8]) -> Result<()> {
        self.write_bytes(&[quote])?;
        self.write_escaped(bytes)?;
        self.write_bytes(&[quote])
    }

    /// Finished rows: trailing whitespace trimmed, tiles resolved.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| resolve_row(trim_row(row)))
    }

    fn span(&mut self, len: usize) -> Result<&mut [Cell]> {
        let Cursor { x, y } = self.cursor;
        let overflow = RenderError::WriteOverflow {
            x,
            y,
            len,
            width: self.width,
            height: self.rows.len(),
        };

        if x < 0 || y < 0 {
            return Err(overflow);
        }
        let (x, y) = (x as usize, y as usize);
        if x + len > self.width {
            return Err(overflow);
        }
        match self.rows.get_mut(y) {
            Some(row) => Ok(&mut row[x..x + len]),
            None => Err(overflow),
        }
    }
}
