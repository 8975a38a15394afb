//! Gherkin scenarios for the distribution pipeline
//!
//! Feature files live in `features/` at the workspace root, one per stage
//! group (fixed shares, blocking, remainder handling, input validation).
//!
//! ```bash
//! cargo test --test bdd
//! RUST_LOG=feraiz_engine=trace cargo test --test bdd -- --nocapture
//! ```

#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

mod helpers;
mod steps;
mod world;

use cucumber::World;
use std::path::PathBuf;

/// `<workspace>/features`, two levels above this package's manifest.
fn features_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(|root| root.join("features"))
        .expect("package is not nested under packages/");

    assert!(dir.is_dir(), "no features directory at {}", dir.display());
    dir
}

#[tokio::main]
async fn main() {
    // Engine trace events show up with RUST_LOG and --nocapture.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .init();

    world::FeraizWorld::cucumber()
        .with_default_cli()
        .run_and_exit(features_dir())
        .await;
}
