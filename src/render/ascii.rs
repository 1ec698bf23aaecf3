//! Level-by-level ASCII rendering of a computed layout.
//!
//! Each tree level produces up to four rows:
//!
//! ```text
//!   root     labels
//!   |        descenders under nodes that have children
//! -----      sibling rule joining children of the same parent
//! | | |      ascenders into the next level's labels
//! a b c
//! ```
//!
//! The last level only emits its label row, so a tree with `h` levels renders
//! as `4 * (h - 1) + 1` rows with no trailing newline.

use tracing::{debug, instrument};

use super::{BLANK, H_LINE, V_LINE};
use crate::layout::LayoutTable;
use crate::node::Node;

/// Render `root` using a layout previously computed for it.
///
/// # Examples
///
/// ```
/// use ascii_tree::{LayoutTable, TreeNode};
/// use ascii_tree::render::ascii::render_layout;
///
/// let root = TreeNode::leaf("root").with_children(["a", "b", "c"].map(TreeNode::from));
/// let layout = LayoutTable::compute(&root, 1).unwrap();
///
/// assert_eq!(render_layout(&root, &layout), "  root\n  |\n-----\n| | |\na b c");
/// ```
pub fn render_layout<N: Node>(root: N, layout: &LayoutTable<N>) -> String {
    let mut buf = String::with_capacity(estimate_size(layout));
    render_layout_to(root, layout, &mut buf);
    buf
}

/// Render `root` into a provided buffer.
///
/// Nodes missing from `layout` are skipped.
#[instrument(level = "debug", skip_all, fields(root = root.id()))]
pub fn render_layout_to<N: Node>(root: N, layout: &LayoutTable<N>, output: &mut String) {
    let start = output.len();
    let mut rows = 1;
    let mut current: Vec<&N> = vec![&root];

    loop {
        write_labels(output, &current, layout);

        let next: Vec<&N> = current
            .iter()
            .flat_map(|node| layout.children(node.id()).unwrap_or(&[]))
            .collect();
        if next.is_empty() {
            break;
        }
        output.push('\n');

        write_descenders(output, &current, layout);
        output.push('\n');
        write_sibling_rule(output, &next, layout);
        output.push('\n');
        write_ascenders(output, &next, layout);
        output.push('\n');

        rows += 4;
        current = next;
    }

    debug!(rows, bytes = output.len() - start, "render complete");
}

/// Capacity hint for the output buffer.
///
/// Counts one byte per column of the tree's width on every row. Multibyte
/// labels and overlapping labels can make the output longer.
pub fn estimate_size<N: Node>(layout: &LayoutTable<N>) -> usize {
    let rows = layout
        .height()
        .saturating_sub(1)
        .saturating_mul(4)
        .saturating_add(1);
    layout.width().saturating_add(1).saturating_mul(rows)
}

#[inline]
fn pad(output: &mut String, fill: char, count: usize) {
    for _ in 0..count {
        output.push(fill);
    }
}

fn write_labels<N: Node>(output: &mut String, level: &[&N], layout: &LayoutTable<N>) {
    let mut first_empty_column = 0;
    for node in level {
        let Some(position) = layout.position(node.id()) else {
            continue;
        };
        pad(output, BLANK, position.root_column.saturating_sub(first_empty_column));
        output.push_str(node.label());
        first_empty_column = position.root_column + node.label_width();
    }
}

/// `|` under every node that has children; childless nodes only pad.
fn write_descenders<N: Node>(output: &mut String, level: &[&N], layout: &LayoutTable<N>) {
    let mut first_empty_column = 0;
    for node in level {
        let Some(position) = layout.position(node.id()) else {
            continue;
        };
        pad(output, BLANK, position.root_column.saturating_sub(first_empty_column));
        first_empty_column = position.root_column;
        if layout.children(node.id()).is_some_and(|children| !children.is_empty()) {
            output.push(V_LINE);
            first_empty_column += 1;
        }
    }
}

/// Horizontal rule joining siblings. Only children get `|`, others `-`.
fn write_sibling_rule<N: Node>(output: &mut String, level: &[&N], layout: &LayoutTable<N>) {
    let mut first_empty_column = 0;
    let mut previous_parent: Option<&str> = None;

    for node in level {
        let Some(position) = layout.position(node.id()) else {
            continue;
        };
        let parent = layout.parent(node.id());

        let fill = match (previous_parent, parent) {
            (Some(previous), Some(parent)) if previous == parent.id() => H_LINE,
            _ => BLANK,
        };
        pad(output, fill, position.root_column.saturating_sub(first_empty_column));

        let siblings = parent
            .and_then(|parent| layout.children(parent.id()))
            .map_or(1, <[N]>::len);
        output.push(if siblings == 1 { V_LINE } else { H_LINE });

        first_empty_column = position.root_column + 1;
        previous_parent = parent.map(Node::id);
    }
}

fn write_ascenders<N: Node>(output: &mut String, level: &[&N], layout: &LayoutTable<N>) {
    let mut first_empty_column = 0;
    for node in level {
        let Some(position) = layout.position(node.id()) else {
            continue;
        };
        pad(output, BLANK, position.root_column.saturating_sub(first_empty_column));
        output.push(V_LINE);
        first_empty_column = position.root_column + 1;
    }
}
