//! Cla CLI - the `cla` binary's command handlers.
//!
//! The binary is a thin argument dispatcher over [`commands`]; everything
//! that decides behavior lives in `cla_eval`.

use std::sync::Once;

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=cla_eval=debug` or `RUST_LOG=cla_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}
