//! Measurement of literal text for layout.
//!
//! The layout-tree builder is handed a [`LayoutContext`] and asks it for the
//! dimensions of every text leaf. [`MonoText`] measures in monospace cells and
//! agrees with the renderer's escaping byte for byte.
//!
//! # Examples
//!
//! ```
//! use ascii_railroad::dim::{DimensionOracle, Dimensions, MonoText};
//!
//! // a"b  ->  "a\"b"
//! assert_eq!(MonoText.measure_bytes(b"a\"b"), Dimensions::new(6, 0, 1));
//! assert_eq!(MonoText.measure_str("expr"), Dimensions::new(6, 0, 1));
//! ```

use crate::text::escaped_len;

/// Width, ascent and descent of a laid-out box, in character cells.
///
/// Ascent counts rows above the anchor line; descent counts the anchor row and
/// the rows below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub w: usize,
    pub a: usize,
    pub d: usize,
}

impl Dimensions {
    pub const fn new(w: usize, a: usize, d: usize) -> Self {
        Self { w, a, d }
    }

    /// Total rows occupied.
    pub const fn height(&self) -> usize {
        self.a + self.d
    }
}

/// The measurement callbacks offered to a layout-tree builder.
///
/// Both operations return the size of the text once quoted and escaped.
pub trait DimensionOracle {
    /// Measure raw bytes (literals and prose, which need not be UTF-8).
    fn measure_bytes(&self, bytes: &[u8]) -> Dimensions;

    /// Measure a conventional string such as a rule name.
    fn measure_str(&self, s: &str) -> Dimensions {
        self.measure_bytes(s.as_bytes())
    }
}

/// Monospace text measurement: one cell per escaped byte plus two quotes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoText;

impl DimensionOracle for MonoText {
    fn measure_bytes(&self, bytes: &[u8]) -> Dimensions {
        Dimensions::new(escaped_len(bytes) + 2, 0, 1)
    }
}

/// Numeric layout parameters owned by the diagram builder.
///
/// They are forwarded to the builder unmodified; this crate never interprets
/// them. [`BuilderParams::MONO_TEXT`] holds the values conventionally paired
/// with [`MonoText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderParams(pub [u32; 6]);

impl BuilderParams {
    pub const MONO_TEXT: Self = Self([2, 0, 4, 0, 2, 1]);
}

impl Default for BuilderParams {
    fn default() -> Self {
        Self::MONO_TEXT
    }
}

/// Everything a layout-tree builder receives from the driver.
#[derive(Clone, Copy)]
pub struct LayoutContext<'a> {
    pub oracle: &'a dyn DimensionOracle,
    pub params: BuilderParams,
}

impl<'a> LayoutContext<'a> {
    pub fn new(oracle: &'a dyn DimensionOracle, params: BuilderParams) -> Self {
        Self { oracle, params }
    }
}

impl Default for LayoutContext<'static> {
    fn default() -> Self {
        Self::new(&MonoText, BuilderParams::default())
    }
}

impl core::fmt::Debug for LayoutContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LayoutContext")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
