//! Read-only world query ports: map, shroud, diplomacy, reservations, and
//! target-line feedback.

use airlift_domain::{ActorId, CellPos, LineColor, Target, WorldPos};

// =============================================================================
// Map / Shroud
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait MapPort: Send + Sync {
    fn cell_containing(&self, position: WorldPos) -> CellPos;
    fn center_of_cell(&self, cell: CellPos) -> WorldPos;
    /// Nearest cell inside the map bounds.
    fn clamp(&self, cell: CellPos) -> CellPos;
    /// Whether the cell lies within the playable map.
    fn contains(&self, cell: CellPos) -> bool;
    /// Custom cursor of the terrain at `cell`, if the terrain defines one.
    fn terrain_cursor(&self, cell: CellPos) -> Option<String>;
}

/// Shroud as seen by the issuing actor's owner.
#[cfg_attr(test, mockall::automock)]
pub trait ShroudPort: Send + Sync {
    fn is_explored(&self, cell: CellPos) -> bool;
}

// =============================================================================
// Diplomacy / Selection
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait WorldPort: Send + Sync {
    fn appears_hostile_to(&self, issuer: ActorId, other: ActorId) -> bool;
    fn same_owner(&self, a: ActorId, b: ActorId) -> bool;
    /// Whether the actor is part of the local player's selection.
    fn is_selected(&self, actor: ActorId) -> bool;
}

// =============================================================================
// Reservations
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ReservationPort: Send + Sync {
    /// Whether `target` (e.g. a helipad) can be reserved by `issuer`.
    fn is_available_for(&self, target: ActorId, issuer: ActorId) -> bool;
}

// =============================================================================
// Feedback
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait TargetLinePort: Send + Sync {
    fn draw_target_line(&self, target: &Target, color: LineColor);
}
