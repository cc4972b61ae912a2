//! Error types for layout validation, rendering and the grammar driver.

use alloc::string::String;

/// Errors raised while building, validating or painting a railroad diagram.
///
/// Every variant is fatal for the batch: the driver stops at the first error
/// and does not print a partial block for the failing rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The external builder could not produce a diagram graph for a rule.
    #[error("failed to build diagram for rule `{rule}`: {reason}")]
    GraphBuild { rule: String, reason: String },

    /// A vertical list asked for more than one branch above the main line.
    #[error("vlist with {above} branches above the main line is not supported")]
    UnsupportedLayout { above: usize },

    /// A write would leave the canvas. Measurement and painting disagree.
    #[error("write of {len} cells at ({x}, {y}) exceeds {width}x{height} canvas")]
    WriteOverflow {
        x: isize,
        y: isize,
        len: usize,
        width: usize,
        height: usize,
    },

    /// The layout tree breaks one of its structural invariants.
    #[error("malformed layout tree: {0}")]
    MalformedTree(String),

    /// The output sink refused a write.
    #[error("failed to write diagram output")]
    Sink(#[from] core::fmt::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, RenderError>;

impl RenderError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedTree(message.into())
    }
}
