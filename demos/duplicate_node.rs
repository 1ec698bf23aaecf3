use ascii_tree::TreeNode;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Duplicate Identifier ===\n");

    // "logging" is listed under two parents, so this is not a tree.
    let root = TreeNode::new("app", "app").with_children([
        TreeNode::new("core", "core").with_child(TreeNode::new("logging", "logging")),
        TreeNode::new("cli", "cli").with_child(TreeNode::new("logging", "logging")),
    ]);

    match ascii_tree::render(&root, 1) {
        Ok(diagram) => println!("{diagram}"),
        Err(err) => println!("Error: {err}"),
    }
}
