//! Column layout for rooted trees.
//!
//! A single depth-first, post-order pass assigns every node a [`Position`]:
//!
//! - A **leaf** starts at the leftmost free column and spans its label.
//! - An **internal node** lays its children out left to right, each one
//!   starting `min_leaf_distance` blank columns after the previous child's
//!   subtree. The node is then centered over the *root* columns of its first
//!   and last child, and its span grows if its own label is wider than the
//!   children below it.
//!
//! Because gaps are carried upward through each subtree's right edge, the
//! minimum distance holds between adjacent subtrees at every level, not only
//! between leaves.
//!
//! The traversal uses an explicit stack, so very deep trees do not exhaust the
//! call stack. Column arithmetic is checked: a tree too wide for `usize`
//! fails with [`LayoutError::ColumnOverflow`] instead of wrapping.
//!
//! ## Example
//!
//! ```
//! use ascii_tree::{LayoutTable, TreeNode};
//!
//! let root = TreeNode::leaf("root").with_children(["a", "b"].map(TreeNode::from));
//! let layout = LayoutTable::compute(&root, 1).unwrap();
//!
//! assert_eq!(layout.position("a").unwrap().root_column, 0);
//! assert_eq!(layout.position("b").unwrap().root_column, 2);
//! assert_eq!(layout.position("root").unwrap().root_column, 1);
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::vec;

use tracing::{debug, instrument, trace, warn};

use crate::error::{LayoutError, Result};
use crate::node::Node;

/// Columns occupied by a node and its subtree.
///
/// The subtree span is half-open: `min_column..end_column`. An empty-label
/// leaf therefore has `end_column == min_column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column where the node's label begins.
    pub root_column: usize,
    /// Leftmost column of the subtree.
    pub min_column: usize,
    /// One past the rightmost column of the subtree.
    pub end_column: usize,
}

impl Position {
    /// Rightmost occupied column, or `None` when the span is empty.
    pub fn max_column(&self) -> Option<usize> {
        (self.end_column > self.min_column).then(|| self.end_column - 1)
    }

    /// Number of columns spanned by the subtree.
    pub fn width(&self) -> usize {
        self.end_column - self.min_column
    }
}

/// Layout state of a node whose children are still being placed.
struct Frame<N> {
    node: N,
    pending: vec::IntoIter<N>,
    depth: usize,
    min_column: usize,
    first_child_root: Option<usize>,
    last_child: Option<Position>,
}

impl<N: Node> Frame<N> {
    fn new(node: N, pending: Vec<N>, min_column: usize, depth: usize) -> Self {
        Self {
            node,
            pending: pending.into_iter(),
            depth,
            min_column,
            first_child_root: None,
            last_child: None,
        }
    }

    /// Leftmost column available to the next child.
    fn next_start(&self, min_leaf_distance: usize) -> Option<usize> {
        match self.last_child {
            Some(last) => last.end_column.checked_add(min_leaf_distance),
            None => Some(self.min_column),
        }
    }

    /// Compute the node's position once all of its children are placed.
    fn place(&self) -> Option<Position> {
        let width = self.node.label_width();
        match (self.first_child_root, self.last_child) {
            (Some(first_root), Some(last)) => {
                // floor((first + last) / 2) without the intermediate sum
                let root_column =
                    first_root.min(last.root_column) + first_root.abs_diff(last.root_column) / 2;
                Some(Position {
                    root_column,
                    min_column: self.min_column,
                    end_column: last.end_column.max(root_column.checked_add(width)?),
                })
            }
            _ => Some(Position {
                root_column: self.min_column,
                min_column: self.min_column,
                end_column: self.min_column.checked_add(width)?,
            }),
        }
    }
}

/// Positions, children and parents of every node of one tree.
///
/// Holds node handles cloned from the caller's tree and is built once per
/// render.
#[derive(Debug)]
pub struct LayoutTable<N> {
    root: N,
    positions: HashMap<String, Position>,
    children: HashMap<String, Vec<N>>,
    parents: HashMap<String, N>,
    min_leaf_distance: usize,
    height: usize,
}

impl<N: Node> LayoutTable<N> {
    /// Lay out the tree rooted at `root`.
    ///
    /// Fails with [`LayoutError::DuplicateNode`] as soon as an identifier is
    /// reached a second time, and with [`LayoutError::ColumnOverflow`] when a
    /// column no longer fits in a `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ascii_tree::{LayoutError, LayoutTable, TreeNode};
    ///
    /// let root = TreeNode::leaf("r").with_children(["x", "x"].map(TreeNode::from));
    /// let err = LayoutTable::compute(&root, 1).unwrap_err();
    /// assert_eq!(err, LayoutError::DuplicateNode { id: "x".to_string() });
    /// ```
    #[instrument(
        level = "debug",
        skip_all,
        fields(root = root.id(), min_leaf_distance = min_leaf_distance)
    )]
    pub fn compute(root: N, min_leaf_distance: usize) -> Result<Self> {
        let mut table = Self {
            root: root.clone(),
            positions: HashMap::new(),
            children: HashMap::new(),
            parents: HashMap::new(),
            min_leaf_distance,
            height: 1,
        };

        let pending = table.enter(&root)?;
        let mut stack = vec![Frame::new(root, pending, 0, 1)];

        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.pending.next() {
                let start = frame
                    .next_start(min_leaf_distance)
                    .ok_or_else(|| column_overflow(&child))?;
                let depth = frame.depth + 1;

                table.parents.insert(child.id().to_string(), frame.node.clone());
                let pending = table.enter(&child)?;
                table.height = table.height.max(depth);
                stack.push(Frame::new(child, pending, start, depth));
                continue;
            }

            let position = frame.place().ok_or_else(|| column_overflow(&frame.node))?;
            trace!(
                id = frame.node.id(),
                root_column = position.root_column,
                min_column = position.min_column,
                end_column = position.end_column,
                "placed node"
            );
            table.positions.insert(frame.node.id().to_string(), position);
            stack.pop();

            if let Some(parent) = stack.last_mut() {
                parent.first_child_root.get_or_insert(position.root_column);
                parent.last_child = Some(position);
            }
        }

        debug!(
            nodes = table.len(),
            height = table.height,
            width = table.width(),
            "layout complete"
        );
        Ok(table)
    }

    /// Record the children of `node`, rejecting identifiers already seen.
    fn enter(&mut self, node: &N) -> Result<Vec<N>> {
        match self.children.entry(node.id().to_string()) {
            Entry::Occupied(_) => {
                warn!(id = node.id(), "node identifier visited twice");
                Err(LayoutError::DuplicateNode {
                    id: node.id().to_string(),
                })
            }
            Entry::Vacant(slot) => {
                let children: Vec<N> = node.children().into_iter().collect();
                slot.insert(children.clone());
                Ok(children)
            }
        }
    }

    /// Root the layout was computed for.
    pub fn root(&self) -> &N {
        &self.root
    }

    pub fn position(&self, id: &str) -> Option<Position> {
        self.positions.get(id).copied()
    }

    /// Children recorded for `id`, in caller order.
    pub fn children(&self, id: &str) -> Option<&[N]> {
        self.children.get(id).map(Vec::as_slice)
    }

    /// Parent of `id`. `None` for the root and for unknown identifiers.
    pub fn parent(&self, id: &str) -> Option<&N> {
        self.parents.get(id)
    }

    /// Number of laid-out nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of levels, the root being level 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Columns spanned by the whole tree.
    pub fn width(&self) -> usize {
        self.position(self.root.id())
            .map_or(0, |position| position.end_column)
    }

    pub fn min_leaf_distance(&self) -> usize {
        self.min_leaf_distance
    }
}

fn column_overflow<N: Node>(node: &N) -> LayoutError {
    warn!(id = node.id(), "column out of range");
    LayoutError::ColumnOverflow {
        id: node.id().to_string(),
    }
}
