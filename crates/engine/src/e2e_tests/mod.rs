//! Flow tests for the transform-before-obeying order trait.
//!
//! Each test drives one actor through the in-memory adapters: a target is
//! evaluated, the chosen order issued and resolved, and the transform then
//! completed so that its deferred orders replay.
//!
//! # Running
//!
//! ```bash
//! cargo test -p airlift-engine --lib e2e_tests
//! ```

mod e2e_helpers;

pub use e2e_helpers::*;
