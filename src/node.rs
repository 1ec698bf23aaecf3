//! Node abstraction consumed by the layout engine.
//!
//! [`Node`] is implemented by a cheap, cloneable *handle* to a node: a shared
//! reference for trees that own their children, an `Rc` for shared trees, or an
//! `(arena, index)` pair for index-linked trees. For quick use, [`TreeNode`] is
//! an owned tree whose references (`&TreeNode`) implement [`Node`].
//!
//! ## Requirements
//!
//! - `id()` must be unique across the whole tree. Reaching the same
//!   identifier twice makes layout fail with
//!   [`LayoutError::DuplicateNode`](crate::LayoutError::DuplicateNode).
//! - `label()` must not contain line breaks. Each `char` is assumed to occupy
//!   one column.

/// A handle to a node of a rooted tree.
///
/// # Examples
///
/// Children stored behind boxes:
///
/// ```
/// use ascii_tree::Node;
///
/// struct Dir {
///     path: String,
///     name: String,
///     entries: Vec<Box<Dir>>,
/// }
///
/// impl<'a> Node for &'a Dir {
///     fn id(&self) -> &str {
///         &self.path
///     }
///     fn children(&self) -> impl IntoIterator<Item = Self> {
///         self.entries.iter().map(|entry| &**entry)
///     }
///     fn label(&self) -> &str {
///         &self.name
///     }
/// }
///
/// let etc = Dir { path: "/etc".into(), name: "etc".into(), entries: vec![] };
/// let root = Dir { path: "/".into(), name: "/".into(), entries: vec![Box::new(etc)] };
/// assert_eq!(ascii_tree::render(&root, 1).unwrap(), "/\n|\n|\n|\netc");
/// ```
///
/// Index-linked nodes:
///
/// ```
/// use ascii_tree::Node;
///
/// struct Arena {
///     names: Vec<&'static str>,
///     children: Vec<Vec<usize>>,
/// }
///
/// #[derive(Clone, Copy)]
/// struct Handle<'a> {
///     arena: &'a Arena,
///     index: usize,
/// }
///
/// impl<'a> Node for Handle<'a> {
///     fn id(&self) -> &str {
///         self.arena.names[self.index]
///     }
///     fn children(&self) -> impl IntoIterator<Item = Self> {
///         let arena = self.arena;
///         arena.children[self.index]
///             .iter()
///             .map(move |&index| Handle { arena, index })
///     }
///     fn label(&self) -> &str {
///         self.id()
///     }
/// }
///
/// let arena = Arena {
///     names: vec!["r", "a", "b"],
///     children: vec![vec![1, 2], vec![], vec![]],
/// };
/// let root = Handle { arena: &arena, index: 0 };
/// assert_eq!(ascii_tree::render(root, 1).unwrap(), " r\n |\n---\n| |\na b");
/// ```
pub trait Node: Clone {
    /// Identifier, unique within the tree.
    fn id(&self) -> &str;

    /// Children in left-to-right order. Empty for a leaf.
    fn children(&self) -> impl IntoIterator<Item = Self>;

    /// Single-line text drawn for this node.
    fn label(&self) -> &str;

    /// Number of columns the label occupies.
    #[inline]
    fn label_width(&self) -> usize {
        self.label().chars().count()
    }
}

/// An owned tree node.
///
/// # Examples
///
/// ```
/// use ascii_tree::TreeNode;
///
/// let root = TreeNode::new("root", "Root")
///     .with_child(TreeNode::leaf("a"))
///     .with_child(TreeNode::leaf("b"));
///
/// assert_eq!(root.children().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    id: String,
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a childless node.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Create a childless node whose identifier doubles as its label.
    pub fn leaf(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(name.clone(), name)
    }

    /// Append a child and return the node (builder style).
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children and return the node (builder style).
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = TreeNode>,
    {
        self.children.extend(children);
        self
    }

    /// Append a child in place.
    pub fn add_child(&mut self, child: TreeNode) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<'a> Node for &'a TreeNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn children(&self) -> impl IntoIterator<Item = Self> {
        self.children.iter()
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl From<&str> for TreeNode {
    fn from(name: &str) -> Self {
        TreeNode::leaf(name)
    }
}
