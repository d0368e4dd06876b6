//! Index module tests.
//!
//! - `scenarios.rs` - game-like event sequences through the coordinator
//! - `proptest.rs` - property-based tests

mod proptest;
