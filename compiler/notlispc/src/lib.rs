//! not-lisp command-line front end.
//!
//! The binary (`notlisp`) is a thin argument dispatcher over the commands
//! here, so every command can be driven from tests with in-memory input and
//! a buffer print handler.

pub mod commands;
mod report;

use std::sync::Once;

pub use report::render_parse_error;

static TRACING_INIT: Once = Once::new();

/// Install a tree-shaped tracing subscriber on stderr when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        }
    });
}
