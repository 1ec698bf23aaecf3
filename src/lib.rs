//! # ascii-tree
//!
//! Lightweight ASCII renderer for rooted trees.
//!
//! ## Features
//!
//! - **Compact**: sibling subtrees are packed side by side with a configurable
//!   minimum gap
//! - **Generic**: render any tree (owned, boxed, `Rc`, arena) by implementing
//!   the three-method [`Node`] trait on a node handle
//! - **Deep trees**: layout uses an explicit stack, not recursion
//! - **Safe**: shared subtrees and cycles are reported as [`LayoutError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ascii_tree::TreeNode;
//!
//! let root = TreeNode::new("root", "root")
//!     .with_child(TreeNode::leaf("a"))
//!     .with_child(TreeNode::leaf("b"))
//!     .with_child(TreeNode::leaf("c"));
//!
//! let diagram = ascii_tree::render(&root, 1).unwrap();
//! assert_eq!(diagram, "  root\n  |\n-----\n| | |\na b c");
//! ```
//!
//! ## Two passes
//!
//! 1. [`LayoutTable::compute`] walks the tree depth-first and assigns every
//!    node a [`Position`].
//! 2. [`render::ascii::render_layout`] walks the tree level by level and
//!    writes the label, descender, sibling rule and ascender rows.
//!
//! ## Logging
//!
//! Layout and rendering emit [`tracing`] spans and events at `debug` and
//! `trace` level. Install a subscriber to see them; the library never installs
//! one itself.

pub mod error;
pub mod layout;
pub mod node;
pub mod render;

pub use error::{LayoutError, Result};
pub use layout::{LayoutTable, Position};
pub use node::{Node, TreeNode};
pub use render::RenderOptions;

/// Render the tree rooted at `root`.
///
/// `min_leaf_distance` is the minimum number of blank columns between
/// adjacent sibling subtrees.
///
/// # Errors
///
/// [`LayoutError::DuplicateNode`] if an identifier is reached twice,
/// [`LayoutError::ColumnOverflow`] if a column does not fit in a `usize`.
///
/// # Examples
///
/// ```
/// use ascii_tree::TreeNode;
///
/// let root = TreeNode::leaf("solo");
/// assert_eq!(ascii_tree::render(&root, 0).unwrap(), "solo");
/// ```
pub fn render<N: Node>(root: N, min_leaf_distance: usize) -> Result<String> {
    RenderOptions::new()
        .with_min_leaf_distance(min_leaf_distance)
        .render(root)
}

/// Render the tree rooted at `root`, appending to `output`.
///
/// `output` is left untouched on error.
///
/// # Examples
///
/// ```
/// use ascii_tree::TreeNode;
///
/// let root = TreeNode::leaf("p").with_child(TreeNode::leaf("c"));
/// let mut buf = String::new();
/// ascii_tree::render_to(&root, 1, &mut buf).unwrap();
/// assert_eq!(buf, "p\n|\n|\n|\nc");
/// ```
pub fn render_to<N: Node>(root: N, min_leaf_distance: usize, output: &mut String) -> Result<()> {
    RenderOptions::new()
        .with_min_leaf_distance(min_leaf_distance)
        .render_to(root, output)
}
