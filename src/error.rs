//! Error type for tree layout.

use thiserror::Error;

/// Errors raised while laying out a tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The same identifier was reached twice, so the input is not a tree
    /// (shared subtree or cycle).
    #[error("duplicate node identifier '{id}': input is not a tree")]
    DuplicateNode { id: String },

    /// A column of the node's subtree does not fit in a `usize`, usually
    /// because `min_leaf_distance` is too large.
    #[error("column of node '{id}' is out of range")]
    ColumnOverflow { id: String },
}

pub type Result<T> = core::result::Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_node_message() {
        let err = LayoutError::DuplicateNode { id: "b".to_string() };
        assert_eq!(
            err.to_string(),
            "duplicate node identifier 'b': input is not a tree"
        );
    }

    #[test]
    fn test_column_overflow_message() {
        let err = LayoutError::ColumnOverflow { id: "wide".to_string() };
        assert_eq!(err.to_string(), "column of node 'wide' is out of range");
    }
}
