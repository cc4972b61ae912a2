//! ASCII rendering of layout trees.
//!
//! Rendering happens in two passes over a per-rule [`Canvas`]:
//!
//! - [`paint`] walks the tree and writes text and [`Tile`] placeholders,
//! - [`tile`] trims each row and resolves the placeholders to glyphs.

pub mod canvas;
pub mod paint;
pub mod tile;

pub use canvas::{Canvas, Cursor};
pub use paint::{justify, paint};
pub use tile::{Cell, Tile};
