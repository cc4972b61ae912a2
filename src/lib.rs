//! # ascii-railroad
//!
//! Lightweight ASCII renderer for railroad diagrams of grammar rules.
//!
//! ## Features
//!
//! - **Exact**: every node paints inside its declared width, ascent and descent
//! - **Consistent**: text is measured and painted through one escaping rule
//! - **no_std**: Works in embedded/WASM environments (disable `std`)
//! - **Pluggable**: bring your own grammar parser and diagram builder
//!
//! ## Quick Start
//!
//! ```rust
//! use ascii_railroad::{dim::MonoText, LayoutNode, TlineShape};
//!
//! // "if" cond | "else"
//! let tree = LayoutNode::vlist(
//!     vec![
//!         LayoutNode::hlist(vec![
//!             LayoutNode::literal_cs("if", &MonoText),
//!             LayoutNode::name("cond", &MonoText),
//!         ]),
//!         LayoutNode::literal_cs("else", &MonoText),
//!     ],
//!     vec![TlineShape::D, TlineShape::LowerD],
//!     0,
//! );
//!
//! let out = tree.render().unwrap();
//! assert_eq!(
//!     out,
//!     "    ||--< \"if\" -- cond +--||\n\
//!      \x20       |              |\n\
//!      \x20       +--- \"else\" --->\n"
//! );
//! ```
//!
//! ## Whole grammars
//!
//! Implement [`DiagramBuilder`] for your grammar representation and hand the
//! rules to [`render_grammar`]. Each rule prints as a `name:` header followed
//! by its diagram and a blank line.
//!
//! ## Modules
//!
//! - [`text`] - byte escaping shared by measurement and painting
//! - [`dim`] - the dimension oracle offered to builders
//! - [`tree`] - the dimensioned layout tree
//! - [`render`] - canvas, painter and tile resolution
//! - [`driver`] - per-rule rendering and grammar output

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod dim;
pub mod driver;
pub mod error;
pub mod render;
pub mod text;
pub mod tree;

pub use dim::{BuilderParams, DimensionOracle, Dimensions, LayoutContext, MonoText};
pub use driver::{
    estimate_size, render_grammar, render_rule, render_rule_to, DiagramBuilder, RenderOptions,
    Rule,
};
pub use error::{RenderError, Result};
pub use text::ByteText;
pub use tree::{LayoutNode, NodeKind, TlineShape, VList};
