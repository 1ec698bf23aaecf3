use ascii_tree::{RenderOptions, TreeNode};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Basic Usage Examples ===\n");

    // Example 1: Single node
    println!("1. Single Node:");
    let root = TreeNode::leaf("lonely");
    println!("{}\n", ascii_tree::render(&root, 1).unwrap());

    // Example 2: Chain (single children stay in one column)
    println!("2. Chain:");
    let root = TreeNode::leaf("Parse")
        .with_child(TreeNode::leaf("Compile").with_child(TreeNode::leaf("Link")));
    println!("{}\n", ascii_tree::render(&root, 1).unwrap());

    // Example 3: Fan-out
    println!("3. Fan-out:");
    let root = TreeNode::new("root", "build")
        .with_children(["fmt", "lint", "test", "doc"].map(TreeNode::from));
    println!("{}\n", ascii_tree::render(&root, 2).unwrap());

    // Example 4: Nested families with a wider gap
    println!("4. Nested (min leaf distance 3):");
    let frontend = TreeNode::new("fe", "frontend").with_children([
        TreeNode::new("fe.ui", "ui"),
        TreeNode::new("fe.state", "state"),
    ]);
    let backend = TreeNode::new("be", "backend").with_children([
        TreeNode::new("be.api", "api"),
        TreeNode::new("be.db", "db"),
        TreeNode::new("be.queue", "queue"),
    ]);
    let root = TreeNode::new("app", "app").with_children([frontend, backend]);
    let options = RenderOptions::new().with_min_leaf_distance(3);
    println!("{}", options.render(&root).unwrap());
}
