//! Rendering a whole grammar, one rule after another.
//!
//! The driver owns none of the grammar machinery. A [`DiagramBuilder`] turns
//! each rule body into a diagram graph and then into a [`LayoutNode`]; the
//! driver paints the tree and prints it:
//!
//! ```text
//! expr:
//!     ||--< term +--||
//!         |      |
//!         + num ->
//!
//! ```
//!
//! Rules are processed strictly in order. The first failure aborts the batch;
//! rules printed before it stay printed, and nothing is printed for the failing
//! rule or any after it.

use alloc::string::{String, ToString};
use core::fmt;

use crate::dim::{BuilderParams, LayoutContext, MonoText};
use crate::error::{RenderError, Result};
use crate::render::canvas::{Canvas, Cursor};
use crate::render::paint::paint;
use crate::tree::LayoutNode;

/// Columns reserved on each side of a diagram for the entry and exit pipes.
const MARGIN: usize = 4;

/// Prefix of every diagram row in grammar output.
const INDENT: &str = "    ";

const ENTRY: &[u8] = b"||--";
const EXIT: &[u8] = b"--||";

/// The graph-building collaborator.
///
/// Implementations own parsing-level concerns: turning a rule body into a
/// diagram graph, optionally simplifying it, and laying it out with the
/// measurements in a [`LayoutContext`].
pub trait DiagramBuilder {
    /// Parsed body of one grammar rule.
    type Rule;
    /// Intermediate diagram graph.
    type Graph;
    /// Why a graph could not be built.
    type Error: fmt::Display;

    fn build_graph(&self, rule: &Self::Rule) -> core::result::Result<Self::Graph, Self::Error>;

    /// Simplification pass, run only when [`RenderOptions::prettify`] is set.
    fn simplify(&self, graph: Self::Graph) -> Self::Graph {
        graph
    }

    fn to_layout_tree(&self, graph: &Self::Graph, ctx: &LayoutContext<'_>) -> LayoutNode;
}

/// A named grammar rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<R> {
    pub name: String,
    pub body: R,
}

impl<R> Rule<R> {
    pub fn new(name: impl Into<String>, body: R) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

/// Options for [`render_grammar`].
///
/// # Examples
///
/// ```
/// use ascii_railroad::RenderOptions;
///
/// let options = RenderOptions::new().prettify(true);
/// assert!(options.prettify);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Run the builder's simplification pass before layout.
    pub prettify: bool,
    /// Forwarded to the builder untouched.
    pub params: BuilderParams,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prettify(mut self, prettify: bool) -> Self {
        self.prettify = prettify;
        self
    }

    pub fn params(mut self, params: BuilderParams) -> Self {
        self.params = params;
        self
    }
}

/// Render every rule of a grammar to `sink`.
///
/// Each rule prints as a `name:` header, the diagram rows indented by four
/// spaces, and a blank line.
pub fn render_grammar<B, W>(
    rules: &[Rule<B::Rule>],
    builder: &B,
    options: &RenderOptions,
    sink: &mut W,
) -> Result<()>
where
    B: DiagramBuilder + ?Sized,
    W: fmt::Write + ?Sized,
{
    let ctx = LayoutContext::new(&MonoText, options.params);
    let mut block = String::new();

    for rule in rules {
        let graph = builder.build_graph(&rule.body).map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(rule = %rule.name, error = %err, "failed to build diagram graph");
            RenderError::GraphBuild {
                rule: rule.name.clone(),
                reason: err.to_string(),
            }
        })?;
        let graph = if options.prettify {
            builder.simplify(graph)
        } else {
            graph
        };
        let tree = builder.to_layout_tree(&graph, &ctx);
        drop(graph);

        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!(
            "render_rule",
            rule = %rule.name,
            w = tree.w,
            a = tree.a,
            d = tree.d
        )
        .entered();

        block.clear();
        if let Err(err) = render_rule_to(&tree, &mut block) {
            #[cfg(feature = "tracing")]
            tracing::warn!(rule = %rule.name, error = %err, "failed to render rule");
            return Err(err);
        }

        writeln!(sink, "{}:", rule.name)?;
        sink.write_str(&block)?;
        writeln!(sink)?;
    }

    Ok(())
}

/// Render one layout tree to a diagram block.
///
/// # Examples
///
/// ```
/// use ascii_railroad::{dim::MonoText, render_rule, LayoutNode};
///
/// let tree = LayoutNode::literal_cs("x", &MonoText);
/// assert_eq!(render_rule(&tree).unwrap(), "    ||-- \"x\" --||\n");
/// ```
pub fn render_rule(tree: &LayoutNode) -> Result<String> {
    let mut buf = String::with_capacity(estimate_size(tree));
    render_rule_to(tree, &mut buf)?;
    Ok(buf)
}

/// Render one layout tree into a provided buffer.
///
/// On error, `output` may hold a partial block.
pub fn render_rule_to(tree: &LayoutNode, output: &mut String) -> Result<()> {
    let width = tree.w + 2 * MARGIN;
    let height = tree.a + tree.d;

    #[cfg(feature = "tracing")]
    tracing::debug!(width, height, "allocating canvas");

    let mut canvas = Canvas::new(width, height);
    let anchor = Cursor::new(0, tree.a);

    canvas.restore(anchor);
    canvas.write_bytes(ENTRY)?;
    canvas.restore(anchor.right(width - MARGIN));
    canvas.write_bytes(EXIT)?;

    canvas.restore(anchor.right(MARGIN));
    paint(tree, &mut canvas)?;

    for line in canvas.lines() {
        output.push_str(INDENT);
        output.push_str(&line);
        output.push('\n');
    }
    Ok(())
}

/// Capacity hint for the rendered block of `tree`.
pub fn estimate_size(tree: &LayoutNode) -> usize {
    (tree.w + 2 * MARGIN + INDENT.len() + 1) * (tree.a + tree.d)
}

impl LayoutNode {
    /// Render this tree as a standalone diagram block.
    pub fn render(&self) -> Result<String> {
        render_rule(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TlineShape;
    use alloc::vec;
    use alloc::vec::Vec;

    /// Rule bodies are names of the alternatives; "!" fails to build.
    struct Alternatives;

    impl DiagramBuilder for Alternatives {
        type Rule = Vec<&'static str>;
        type Graph = Vec<&'static str>;
        type Error = &'static str;

        fn build_graph(&self, rule: &Self::Rule) -> core::result::Result<Self::Graph, &'static str> {
            if rule.contains(&"!") {
                return Err("unbuildable");
            }
            Ok(rule.clone())
        }

        fn simplify(&self, mut graph: Self::Graph) -> Self::Graph {
            graph.dedup();
            graph
        }

        fn to_layout_tree(&self, graph: &Self::Graph, ctx: &LayoutContext<'_>) -> LayoutNode {
            let mut branches: Vec<LayoutNode> =
                graph.iter().map(|n| LayoutNode::name(*n, ctx.oracle)).collect();
            if branches.len() == 1 {
                return branches.remove(0);
            }
            let mut connectors = vec![TlineShape::F; branches.len()];
            connectors[0] = TlineShape::D;
            if let Some(last) = connectors.last_mut() {
                *last = TlineShape::LowerD;
            }
            LayoutNode::vlist(branches, connectors, 0)
        }
    }

    #[test]
    fn test_entry_and_exit_pipes() {
        let out = render_rule(&LayoutNode::name("a", &MonoText)).unwrap();
        assert_eq!(out, "    ||-- a --||\n");
    }

    #[test]
    fn test_multi_row_block() {
        let tree = LayoutNode::vlist(
            vec![LayoutNode::name("a", &MonoText), LayoutNode::name("b", &MonoText)],
            vec![TlineShape::D, TlineShape::LowerD],
            0,
        );
        let out = render_rule(&tree).unwrap();
        assert_eq!(
            out,
            "    ||--< a +--||\n        |   |\n        + b >\n"
        );
    }

    #[test]
    fn test_grammar_format() {
        let rules = [
            Rule::new("x", vec!["a"]),
            Rule::new("y", vec!["b", "c"]),
        ];
        let mut out = String::new();
        render_grammar(&rules, &Alternatives, &RenderOptions::new(), &mut out).unwrap();
        assert_eq!(
            out,
            "x:\n    ||-- a --||\n\n\
             y:\n    ||--< b +--||\n        |   |\n        + c >\n\n"
        );
    }

    #[test]
    fn test_prettify_runs_simplify() {
        let rules = [Rule::new("x", vec!["a", "a"])];

        let mut plain = String::new();
        render_grammar(&rules, &Alternatives, &RenderOptions::new(), &mut plain).unwrap();
        assert_eq!(plain.lines().count(), 1 + 3 + 1);

        let mut pretty = String::new();
        let options = RenderOptions::new().prettify(true);
        render_grammar(&rules, &Alternatives, &options, &mut pretty).unwrap();
        assert_eq!(pretty, "x:\n    ||-- a --||\n\n");
    }

    #[test]
    fn test_build_failure_aborts_batch() {
        let rules = [
            Rule::new("ok", vec!["a"]),
            Rule::new("bad", vec!["!"]),
            Rule::new("never", vec!["b"]),
        ];
        let mut out = String::new();
        let err = render_grammar(&rules, &Alternatives, &RenderOptions::new(), &mut out)
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::GraphBuild {
                rule: "bad".into(),
                reason: "unbuildable".into(),
            }
        );
        assert_eq!(out, "ok:\n    ||-- a --||\n\n");
    }

    #[test]
    fn test_estimate_covers_output() {
        let tree = LayoutNode::vlist(
            vec![LayoutNode::name("abc", &MonoText), LayoutNode::skip()],
            vec![TlineShape::D, TlineShape::LowerD],
            0,
        );
        let out = tree.render().unwrap();
        assert!(out.len() <= estimate_size(&tree));
    }
}
