//! The dimensioned layout tree.
//!
//! A [`LayoutNode`] is built once per rule by the diagram builder, is read-only
//! while it is painted, and is dropped after printing. Each node carries its
//! bounding box: it paints within `[0, w) x [-a, d)` relative to the cursor it
//! starts from.
//!
//! The constructors compute conventional dimensions with a
//! [`DimensionOracle`]. Builders with their own geometry may set the public
//! fields directly; [`LayoutNode::validate`] then checks the structure.
//!
//! # Examples
//!
//! ```
//! use ascii_railroad::dim::MonoText;
//! use ascii_railroad::tree::{LayoutNode, TlineShape};
//!
//! // "a" | b
//! let alt = LayoutNode::vlist(
//!     vec![
//!         LayoutNode::literal_cs("a", &MonoText),
//!         LayoutNode::name("b", &MonoText),
//!     ],
//!     vec![TlineShape::D, TlineShape::LowerD],
//!     0,
//! );
//! assert_eq!((alt.w, alt.a, alt.d), (7, 0, 3));
//! assert!(alt.validate().is_ok());
//! ```

use alloc::{boxed::Box, format, string::String, vec::Vec};

use crate::dim::{DimensionOracle, Dimensions};
use crate::error::{RenderError, Result};
use crate::render::tile::Tile;
use crate::text::ByteText;

/// Connector shape at the ends of one VList alternative.
///
/// Upper-case shapes are used for a branch above the main line, lower-case
/// (`Lower*`) shapes for a branch on or below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TlineShape {
    A,
    LowerA,
    B,
    C,
    LowerC,
    D,
    LowerD,
    E,
    F,
    G,
    LowerG,
    H,
    LowerH,
    I,
    LowerI,
}

impl TlineShape {
    /// The `(left, right)` tiles drawn at either end of an alternative.
    pub const fn glyphs(self) -> (Tile, Tile) {
        use Tile::*;
        match self {
            TlineShape::A => (ArrowLeft, ArrowUp),
            TlineShape::LowerA => (ArrowUp, ArrowRight),
            TlineShape::B => (CornerUpperLeft, CornerUpperRight),
            TlineShape::C => (ArrowLeft, ArrowDown),
            TlineShape::LowerC => (ArrowDown, ArrowRight),
            TlineShape::D => (ArrowLeft, Junction),
            TlineShape::LowerD => (Junction, ArrowRight),
            TlineShape::E => (CornerLowerLeft, CornerLowerRight),
            TlineShape::F => (Pipe, Pipe),
            TlineShape::G | TlineShape::I => (ArrowUp, ArrowLeft),
            TlineShape::LowerG | TlineShape::LowerI => (ArrowRight, ArrowUp),
            TlineShape::H => (ArrowDown, ArrowLeft),
            TlineShape::LowerH => (ArrowRight, ArrowDown),
        }
    }
}

/// A stack of alternatives joined at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VList {
    pub branches: Vec<LayoutNode>,
    /// One shape per branch; branch `i` is drawn between the two glyphs of
    /// `connectors[i]`.
    pub connectors: Vec<TlineShape>,
    /// How many branches sit above the main line (0 or 1).
    pub above: usize,
}

/// Variant-specific payload of a [`LayoutNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Skip,
    ArrowLeft,
    ArrowRight,
    /// Marker for a collapsed subtree.
    Ellipsis,
    /// Case-insensitive terminal, drawn with an `/i` suffix.
    LiteralCI(ByteText),
    /// Case-sensitive terminal.
    LiteralCS(ByteText),
    Prose(ByteText),
    /// A body with a caption on its bottom row.
    Comment { body: Box<LayoutNode>, text: String },
    /// Reference to another rule by name.
    Name(String),
    VList(VList),
    HList(Vec<LayoutNode>),
}

/// A node of the layout tree together with its bounding box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutNode {
    pub w: usize,
    pub a: usize,
    pub d: usize,
    pub kind: NodeKind,
}

impl LayoutNode {
    pub fn new(dim: Dimensions, kind: NodeKind) -> Self {
        Self {
            w: dim.w,
            a: dim.a,
            d: dim.d,
            kind,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.w, self.a, self.d)
    }

    pub fn skip() -> Self {
        Self::new(Dimensions::new(0, 0, 1), NodeKind::Skip)
    }

    pub fn arrow_left() -> Self {
        Self::new(Dimensions::new(1, 0, 1), NodeKind::ArrowLeft)
    }

    pub fn arrow_right() -> Self {
        Self::new(Dimensions::new(1, 0, 1), NodeKind::ArrowRight)
    }

    pub fn ellipsis() -> Self {
        Self::new(Dimensions::new(1, 0, 1), NodeKind::Ellipsis)
    }

    /// Case-sensitive literal: ` "text" `.
    pub fn literal_cs(
        text: impl Into<ByteText>,
        oracle: &(impl DimensionOracle + ?Sized),
    ) -> Self {
        let text = text.into();
        let dim = oracle.measure_bytes(text.as_bytes());
        Self::new(
            Dimensions::new(dim.w + 2, dim.a, dim.d),
            NodeKind::LiteralCS(text),
        )
    }

    /// Case-insensitive literal: ` "text"/i `.
    pub fn literal_ci(
        text: impl Into<ByteText>,
        oracle: &(impl DimensionOracle + ?Sized),
    ) -> Self {
        let text = text.into();
        let dim = oracle.measure_bytes(text.as_bytes());
        Self::new(
            Dimensions::new(dim.w + 4, dim.a, dim.d),
            NodeKind::LiteralCI(text),
        )
    }

    /// Prose description: ` ?text? `.
    pub fn prose(text: impl Into<ByteText>, oracle: &(impl DimensionOracle + ?Sized)) -> Self {
        let text = text.into();
        let dim = oracle.measure_bytes(text.as_bytes());
        Self::new(
            Dimensions::new(dim.w + 2, dim.a, dim.d),
            NodeKind::Prose(text),
        )
    }

    /// Rule reference: the name framed by single spaces.
    pub fn name(name: impl Into<String>, oracle: &(impl DimensionOracle + ?Sized)) -> Self {
        let name = name.into();
        // The oracle's two quote cells are the framing spaces
        let dim = oracle.measure_str(&name);
        Self::new(dim, NodeKind::Name(name))
    }

    /// `body` with `text` centred on an extra row underneath it.
    ///
    /// The text is written as is, one cell per byte.
    pub fn comment(body: LayoutNode, text: impl Into<String>) -> Self {
        let text = text.into();
        let dim = Dimensions::new(body.w.max(text.len()), body.a, body.d + 1);
        Self::new(
            dim,
            NodeKind::Comment {
                body: Box::new(body),
                text,
            },
        )
    }

    /// Children laid end to end, joined by `--`.
    pub fn hlist(children: Vec<LayoutNode>) -> Self {
        if children.is_empty() {
            return Self::new(Dimensions::new(0, 0, 1), NodeKind::HList(children));
        }

        let joins = 2 * (children.len() - 1);
        let w = children.iter().map(|c| c.w).sum::<usize>() + joins;
        let a = children.iter().map(|c| c.a).max().unwrap_or(0);
        let d = children.iter().map(|c| c.d).max().unwrap_or(1);
        Self::new(Dimensions::new(w, a, d), NodeKind::HList(children))
    }

    /// Alternatives stacked top to bottom; branch `above` rides the main line.
    ///
    /// Consecutive branches are separated by one blank row plus the
    /// descent/ascent they need.
    pub fn vlist(branches: Vec<LayoutNode>, connectors: Vec<TlineShape>, above: usize) -> Self {
        let w = branches.iter().map(|b| b.w).max().unwrap_or(0) + 2;

        let mut anchors = Vec::with_capacity(branches.len());
        let mut pos = 0;
        for (i, branch) in branches.iter().enumerate() {
            if i > 0 {
                pos += 1 + branches[i - 1].d + branch.a;
            }
            anchors.push(pos);
        }

        let (a, d) = match (branches.first(), branches.last()) {
            (Some(first), Some(last)) => {
                let main = above.min(branches.len() - 1);
                let last_pos = anchors[anchors.len() - 1];
                (anchors[main] + first.a, last_pos - anchors[main] + last.d)
            }
            _ => (0, 1),
        };

        Self::new(
            Dimensions::new(w, a, d),
            NodeKind::VList(VList {
                branches,
                connectors,
                above,
            }),
        )
    }

    /// Check the structural invariants the renderer depends on.
    ///
    /// Dimension arithmetic of builder-supplied nodes is not recomputed; only
    /// relations the renderer asserts are checked.
    pub fn validate(&self) -> Result<()> {
        match &self.kind {
            NodeKind::Skip
            | NodeKind::ArrowLeft
            | NodeKind::ArrowRight
            | NodeKind::Ellipsis
            | NodeKind::LiteralCI(_)
            | NodeKind::LiteralCS(_)
            | NodeKind::Prose(_)
            | NodeKind::Name(_) => Ok(()),
            NodeKind::Comment { body, text } => {
                if body.w > self.w {
                    return Err(RenderError::malformed(format!(
                        "comment body width {} exceeds comment width {}",
                        body.w, self.w
                    )));
                }
                if text.len() > self.w {
                    return Err(RenderError::malformed(format!(
                        "comment text width {} exceeds comment width {}",
                        text.len(),
                        self.w
                    )));
                }
                body.validate()
            }
            NodeKind::HList(children) => children.iter().try_for_each(LayoutNode::validate),
            NodeKind::VList(vlist) => {
                if vlist.connectors.len() != vlist.branches.len() {
                    return Err(RenderError::malformed(format!(
                        "vlist has {} branches but {} connectors",
                        vlist.branches.len(),
                        vlist.connectors.len()
                    )));
                }
                if vlist.branches.is_empty() {
                    return Err(RenderError::malformed("vlist has no branches"));
                }
                if vlist.above >= vlist.branches.len() {
                    return Err(RenderError::malformed(format!(
                        "vlist puts {} of {} branches above the main line",
                        vlist.above,
                        vlist.branches.len()
                    )));
                }
                for branch in &vlist.branches {
                    if branch.w + 2 > self.w {
                        return Err(RenderError::malformed(format!(
                            "vlist branch width {} does not fit vlist width {}",
                            branch.w, self.w
                        )));
                    }
                    branch.validate()?;
                }
                Ok(())
            }
        }
    }
}
