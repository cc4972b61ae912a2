//! Painting a layout tree onto a [`Canvas`].
//!
//! [`paint`] writes a node at the cursor and leaves the cursor `w` columns to
//! the right on the row it started from. Nodes taller than one row (comments
//! and vertical lists) save the cursor, draw their extra rows, and restore it.

use alloc::format;

use super::canvas::Canvas;
use crate::error::{RenderError, Result};
use crate::tree::{LayoutNode, NodeKind, VList};

/// Split the slack of fitting `w` cells into `space` into left and right pads.
///
/// The left pad gets the smaller half.
///
/// # Examples
///
/// ```
/// use ascii_railroad::render::paint::centre;
///
/// assert_eq!(centre(7, 2).unwrap(), (2, 3));
/// assert!(centre(1, 2).is_err());
/// ```
pub fn centre(space: usize, w: usize) -> Result<(usize, usize)> {
    let slack = space.checked_sub(w).ok_or_else(|| {
        RenderError::malformed(format!("width {w} does not fit in {space} columns"))
    })?;
    let lhs = slack / 2;
    Ok((lhs, slack - lhs))
}

/// Paint `node` centred in `space` columns, padding with track (`-`).
///
/// An ellipsis is padded with spaces instead, since it marks a gap in the
/// track rather than a piece of it.
pub fn justify(node: &LayoutNode, space: usize, canvas: &mut Canvas) -> Result<()> {
    let (lhs, rhs) = centre(space, node.w)?;
    let pad = match node.kind {
        NodeKind::Ellipsis => b' ',
        _ => b'-',
    };

    canvas.write_repeat(pad, lhs)?;
    paint(node, canvas)?;
    canvas.write_repeat(pad, rhs)
}

/// Paint `node` at the cursor.
pub fn paint(node: &LayoutNode, canvas: &mut Canvas) -> Result<()> {
    match &node.kind {
        NodeKind::Skip => Ok(()),
        NodeKind::ArrowLeft => canvas.write_repeat(b'<', node.w),
        NodeKind::ArrowRight => canvas.write_repeat(b'>', node.w),
        NodeKind::Ellipsis => canvas.write_bytes(b":"),
        NodeKind::LiteralCI(text) => {
            canvas.write_bytes(b" ")?;
            canvas.write_quoted(b'"', text.as_bytes())?;
            canvas.write_bytes(b"/i ")
        }
        NodeKind::LiteralCS(text) => {
            canvas.write_bytes(b" ")?;
            canvas.write_quoted(b'"', text.as_bytes())?;
            canvas.write_bytes(b" ")
        }
        NodeKind::Prose(text) => {
            canvas.write_bytes(b" ")?;
            canvas.write_quoted(b'?', text.as_bytes())?;
            canvas.write_bytes(b" ")
        }
        NodeKind::Name(name) => canvas.write_quoted(b' ', name.as_bytes()),
        NodeKind::Comment { body, text } => paint_comment(node, body, text, canvas),
        NodeKind::HList(children) => paint_hlist(children, canvas),
        NodeKind::VList(vlist) => paint_vlist(node, vlist, canvas),
    }
}

fn paint_comment(
    node: &LayoutNode,
    body: &LayoutNode,
    text: &str,
    canvas: &mut Canvas,
) -> Result<()> {
    let start = canvas.cursor();

    justify(body, node.w, canvas)?;

    let (lhs, _) = centre(node.w, text.len())?;
    canvas.restore(start.down(node.d.saturating_sub(1)).right(lhs));
    canvas.write_bytes(text.as_bytes())?;

    canvas.restore(start.right(node.w));
    Ok(())
}

fn paint_hlist(children: &[LayoutNode], canvas: &mut Canvas) -> Result<()> {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            canvas.write_bytes(b"--")?;
        }
        paint(child, canvas)?;
    }
    Ok(())
}

fn paint_vlist(node: &LayoutNode, vlist: &VList, canvas: &mut Canvas) -> Result<()> {
    // Only the loop-back track of a repetition ever sits above the line
    if vlist.above > 1 {
        return Err(RenderError::UnsupportedLayout { above: vlist.above });
    }
    if vlist.connectors.len() != vlist.branches.len() {
        return Err(RenderError::malformed(format!(
            "vlist has {} branches but {} connectors",
            vlist.branches.len(),
            vlist.connectors.len()
        )));
    }
    let Some(first) = vlist.branches.first() else {
        return Err(RenderError::malformed("vlist has no branches"));
    };
    let inner = node
        .w
        .checked_sub(2)
        .ok_or_else(|| RenderError::malformed(format!("vlist width {} is too narrow", node.w)))?;

    #[cfg(feature = "tracing")]
    tracing::trace!(
        branches = vlist.branches.len(),
        above = vlist.above,
        w = node.w,
        a = node.a,
        d = node.d,
        "paint vlist"
    );

    let start = canvas.cursor();
    let mut row = if vlist.above == 1 {
        // Puts the first branch's anchor row at its laid-out position
        start.up(node.a.saturating_sub(first.a))
    } else {
        start
    };

    for (j, (branch, shape)) in vlist.branches.iter().zip(&vlist.connectors).enumerate() {
        let (left, right) = shape.glyphs();
        canvas.restore(row);
        canvas.write_tile(left)?;
        justify(branch, inner, canvas)?;
        canvas.write_tile(right)?;

        if let Some(next) = vlist.branches.get(j + 1) {
            row = row.down(1);
            for _ in 0..branch.d + next.a {
                canvas.restore(row);
                bars(canvas, node.w)?;
                row = row.down(1);
            }
        }
    }

    canvas.restore(start.right(node.w));
    Ok(())
}

/// One row of the vertical track joining two alternatives.
fn bars(canvas: &mut Canvas, w: usize) -> Result<()> {
    canvas.write_bytes(b"|")?;
    canvas.advance(w - 2);
    canvas.write_bytes(b"|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dim::{Dimensions, MonoText};
    use crate::render::canvas::Cursor;
    use crate::render::tile::resolve_row;
    use crate::tree::TlineShape;
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    /// Paint `node` on a canvas exactly its own size, anchored at row `a`.
    fn render(node: &LayoutNode) -> Vec<String> {
        let mut canvas = Canvas::new(node.w, node.a + node.d);
        canvas.restore(Cursor::new(0, node.a));
        paint(node, &mut canvas).unwrap();
        assert_eq!(canvas.cursor(), Cursor::new(node.w, node.a));
        canvas.lines().collect()
    }

    #[test]
    fn test_centre_rounds_left_down() {
        assert_eq!(centre(5, 1).unwrap(), (2, 2));
        assert_eq!(centre(6, 1).unwrap(), (2, 3));
        assert_eq!(centre(3, 3).unwrap(), (0, 0));
    }

    #[test]
    fn test_justify_ellipsis_pads_with_spaces() {
        let mut canvas = Canvas::new(5, 1);
        justify(&LayoutNode::ellipsis(), 5, &mut canvas).unwrap();
        assert_eq!(canvas.lines().next().unwrap(), "  :");
        assert_eq!(canvas.cursor().x, 5);
    }

    #[test]
    fn test_justify_pads_with_track() {
        let mut canvas = Canvas::new(8, 1);
        justify(&LayoutNode::name("A", &MonoText), 8, &mut canvas).unwrap();
        assert_eq!(canvas.lines().next().unwrap(), "-- A ---");
    }

    #[test]
    fn test_justify_too_narrow_fails() {
        let mut canvas = Canvas::new(8, 1);
        let node = LayoutNode::name("long", &MonoText);
        assert!(matches!(
            justify(&node, 3, &mut canvas),
            Err(RenderError::MalformedTree(_))
        ));
    }

    #[test]
    fn test_leaves() {
        assert_eq!(render(&LayoutNode::skip()), [""]);
        assert_eq!(render(&LayoutNode::arrow_left()), ["<"]);
        assert_eq!(render(&LayoutNode::arrow_right()), [">"]);
        assert_eq!(render(&LayoutNode::ellipsis()), [":"]);
        assert_eq!(render(&LayoutNode::literal_cs("if", &MonoText)), [" \"if\""]);
        assert_eq!(render(&LayoutNode::literal_ci("if", &MonoText)), [" \"if\"/i"]);
        assert_eq!(render(&LayoutNode::prose("any", &MonoText)), [" ?any?"]);
        assert_eq!(render(&LayoutNode::name("expr", &MonoText)), [" expr"]);
    }

    #[test]
    fn test_wide_arrow_fills_its_width() {
        let mut arrow = LayoutNode::arrow_left();
        arrow.w = 3;
        assert_eq!(render(&arrow), ["<<<"]);
    }

    #[test]
    fn test_literal_escapes() {
        let node = LayoutNode::literal_cs(&b"a\"b\x01"[..], &MonoText);
        assert_eq!(render(&node), [" \"a\\\"b\\x01\""]);
    }

    #[test]
    fn test_hlist_joins_between_children_only() {
        let node = LayoutNode::hlist(vec![
            LayoutNode::name("A", &MonoText),
            LayoutNode::name("B", &MonoText),
        ]);
        let mut canvas = Canvas::new(node.w, 1);
        paint(&node, &mut canvas).unwrap();
        assert_eq!(resolve_row(&canvas.rows()[0]), " A -- B ");
    }

    #[test]
    fn test_vlist_two_alternatives() {
        let node = LayoutNode::vlist(
            vec![
                LayoutNode::name("A", &MonoText),
                LayoutNode::name("BBB", &MonoText),
            ],
            vec![TlineShape::D, TlineShape::LowerD],
            0,
        );
        assert_eq!(render(&node), ["<- A -+", "|     |", "+ BBB >"]);
    }

    #[test]
    fn test_vlist_connector_rows_follow_descent_and_ascent() {
        // The first branch is three rows deep, so three bar rows follow it
        let tall = LayoutNode::vlist(
            vec![LayoutNode::name("x", &MonoText), LayoutNode::name("y", &MonoText)],
            vec![TlineShape::D, TlineShape::LowerD],
            0,
        );
        let node = LayoutNode::vlist(
            vec![tall, LayoutNode::name("z", &MonoText)],
            vec![TlineShape::D, TlineShape::LowerD],
            0,
        );
        assert_eq!(
            render(&node),
            ["<< x ++", "||   ||", "|+ y >|", "|     |", "+- z ->"]
        );
    }

    #[test]
    fn test_vlist_one_branch_above() {
        let node = LayoutNode::vlist(
            vec![LayoutNode::arrow_left(), LayoutNode::name("A", &MonoText)],
            vec![TlineShape::B, TlineShape::E],
            1,
        );
        assert_eq!(render(&node), [",-<-.", "|   |", "` A '"]);
    }

    #[test]
    fn test_vlist_two_above_is_unsupported() {
        let node = LayoutNode::vlist(
            vec![LayoutNode::skip(), LayoutNode::skip(), LayoutNode::skip()],
            vec![TlineShape::B, TlineShape::F, TlineShape::E],
            2,
        );
        let mut canvas = Canvas::new(node.w, node.a + node.d);
        canvas.restore(Cursor::new(0, node.a));
        assert_eq!(
            paint(&node, &mut canvas),
            Err(RenderError::UnsupportedLayout { above: 2 })
        );
        // Failed before drawing anything
        assert!(canvas.lines().all(|l| l.is_empty()));
    }

    #[test]
    fn test_vlist_connector_mismatch_is_malformed() {
        let mut node = LayoutNode::vlist(
            vec![LayoutNode::skip(), LayoutNode::skip()],
            vec![TlineShape::D, TlineShape::LowerD],
            0,
        );
        if let NodeKind::VList(ref mut vlist) = node.kind {
            vlist.connectors.truncate(1);
        }
        let mut canvas = Canvas::new(node.w, node.a + node.d);
        assert!(matches!(
            paint(&node, &mut canvas),
            Err(RenderError::MalformedTree(_))
        ));
    }

    #[test]
    fn test_comment_text_on_bottom_row() {
        let node = LayoutNode::comment(LayoutNode::name("abc", &MonoText), "n");
        assert_eq!(render(&node), [" abc", "  n"]);

        let node = LayoutNode::comment(LayoutNode::name("x", &MonoText), "note");
        assert_eq!(render(&node), [" x -", "note"]);
    }

    #[test]
    fn test_comment_text_is_written_verbatim() {
        let node = LayoutNode::comment(LayoutNode::name("abcdef", &MonoText), "a\"b");
        assert_eq!(render(&node), [" abcdef", "  a\"b"]);

        // Sized by the builder from the raw text length
        let node = LayoutNode::new(
            Dimensions::new(4, 0, 2),
            NodeKind::Comment {
                body: Box::new(LayoutNode::name("ab", &MonoText)),
                text: "\"x\"y".into(),
            },
        );
        assert!(node.validate().is_ok());
        assert_eq!(render(&node), [" ab", "\"x\"y"]);
    }

    #[test]
    fn test_vlist_inside_hlist_returns_to_main_line() {
        let alt = LayoutNode::vlist(
            vec![LayoutNode::name("B", &MonoText), LayoutNode::name("C", &MonoText)],
            vec![TlineShape::D, TlineShape::LowerD],
            0,
        );
        let node = LayoutNode::hlist(vec![
            LayoutNode::name("A", &MonoText),
            alt,
            LayoutNode::name("E", &MonoText),
        ]);
        assert_eq!(
            render(&node),
            [" A --< B +-- E", "     |   |", "     + C >"]
        );
    }
}
