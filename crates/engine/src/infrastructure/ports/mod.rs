//! Port traits for the collaborators of the order trait.
//!
//! These are the only abstractions in the engine. The activity engine,
//! transform capabilities, map and world queries are owned by the surrounding
//! simulation; the engine only consumes them.

use airlift_domain::{CellPos, WorldPos};

mod activity;
mod world;

pub use activity::{ActivityPort, TransformCapability};
pub use world::{MapPort, ReservationPort, ShroudPort, TargetLinePort, WorldPort};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use activity::{MockActivityPort, MockTransformCapability};
#[cfg(test)]
pub use world::{
    MockMapPort, MockReservationPort, MockShroudPort, MockTargetLinePort, MockWorldPort,
};

// =============================================================================
// Service Bundle
// =============================================================================

/// Read-only world services handed to every order entry point.
#[derive(Clone, Copy)]
pub struct WorldServices<'a> {
    pub map: &'a dyn MapPort,
    pub shroud: &'a dyn ShroudPort,
    pub world: &'a dyn WorldPort,
    pub reservations: &'a dyn ReservationPort,
    pub target_lines: &'a dyn TargetLinePort,
}

impl WorldServices<'_> {
    /// Cell under a world position, clamped into the map.
    pub(crate) fn clamped_cell(&self, position: WorldPos) -> CellPos {
        self.map.clamp(self.map.cell_containing(position))
    }
}
