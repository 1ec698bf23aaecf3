#![allow(dead_code)]

use std::sync::Once;

use ascii_tree::TreeNode;
use tracing::{debug, info};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    // RUST_LOG wins; otherwise show the library's debug events.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ascii_tree=debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Complete tree where every internal node has `fanout` children.
///
/// Identifiers are the path from the root (`"0"`, `"0.1"`, `"0.1.0"`, ...);
/// labels are the last path segment.
pub fn complete_tree(levels: usize, fanout: usize) -> TreeNode {
    fn build(path: String, label: String, remaining: usize, fanout: usize) -> TreeNode {
        let mut node = TreeNode::new(path.clone(), label);
        if remaining > 1 {
            for i in 0..fanout {
                node.add_child(build(format!("{path}.{i}"), i.to_string(), remaining - 1, fanout));
            }
        }
        node
    }
    build("0".to_string(), "0".to_string(), levels, fanout)
}
