//! Shared test helpers for `profilehub-core` integration tests.
//!
//! Provides a sample backend record and an in-memory update port so that
//! tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod ports;

use std::sync::Once;

use profilehub_common::observability::{init_tracing, LogFormat};

static TRACING: Once = Once::new();

/// Install the fmt subscriber once per test binary so `RUST_LOG` shows
/// normalizer and editor events.
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        if let Err(err) = init_tracing(LogFormat::Pretty) {
            eprintln!("tracing setup failed: {err}");
        }
    });
}
