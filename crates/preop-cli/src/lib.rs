//! Shared CLI infrastructure.
//!
//! The binary lives in `main.rs`; this library exposes the pieces that are
//! reusable from tests.

pub mod logging;
