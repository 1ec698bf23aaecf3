//! ASCII rendering for tree visualization.
//!
//! This module holds the render configuration ([`RenderOptions`]) and the
//! level-by-level renderer in [`ascii`].

pub mod ascii;

use crate::error::Result;
use crate::layout::LayoutTable;
use crate::node::Node;

pub(crate) const V_LINE: char = '|';
pub(crate) const H_LINE: char = '-';
pub(crate) const BLANK: char = ' ';

/// Configuration for a render call.
///
/// # Examples
///
/// ```
/// use ascii_tree::{RenderOptions, TreeNode};
///
/// let root = TreeNode::leaf("r").with_children(["a", "b"].map(TreeNode::from));
/// let options = RenderOptions::new().with_min_leaf_distance(3);
///
/// assert_eq!(options.render(&root).unwrap(), "  r\n  |\n-----\n|   |\na   b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    min_leaf_distance: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            min_leaf_distance: 1,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum number of blank columns between adjacent sibling
    /// subtrees.
    pub fn with_min_leaf_distance(mut self, min_leaf_distance: usize) -> Self {
        self.min_leaf_distance = min_leaf_distance;
        self
    }

    pub fn set_min_leaf_distance(&mut self, min_leaf_distance: usize) {
        self.min_leaf_distance = min_leaf_distance;
    }

    pub fn min_leaf_distance(&self) -> usize {
        self.min_leaf_distance
    }

    /// Compute the layout of `root` with these options.
    pub fn layout<N: Node>(&self, root: N) -> Result<LayoutTable<N>> {
        LayoutTable::compute(root, self.min_leaf_distance)
    }

    /// Lay out and render `root`.
    pub fn render<N: Node>(&self, root: N) -> Result<String> {
        let layout = self.layout(root)?;
        Ok(ascii::render_layout(layout.root().clone(), &layout))
    }

    /// Lay out `root` and append the diagram to `output`.
    ///
    /// `output` is left untouched when layout fails.
    pub fn render_to<N: Node>(&self, root: N, output: &mut String) -> Result<()> {
        let layout = self.layout(root)?;
        ascii::render_layout_to(layout.root().clone(), &layout, output);
        Ok(())
    }
}
