//! Airlift engine library.
//!
//! Order handling for actors that must transform before they can obey move
//! and enter orders, plus in-memory adapters and a scenario runner.
//!
//! ## Structure
//!
//! - `orders/` - the order trait: targeting, issuing, resolution, voice
//! - `infrastructure/` - port traits and in-memory adapters
//! - `scenario` - scripted scenarios played by the runner binary

pub mod infrastructure;
pub mod orders;
pub mod scenario;

/// Test fixtures shared by unit and flow tests.
#[cfg(test)]
pub mod test_fixtures;

/// Flow tests driving the in-memory adapters end to end.
#[cfg(test)]
mod e2e_tests;

pub use orders::TransformOrders;
