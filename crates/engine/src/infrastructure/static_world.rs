//! In-memory ownership, diplomacy, selection and dock reservations.

use std::collections::{HashMap, HashSet};

use airlift_domain::ActorId;

use crate::infrastructure::ports::{ReservationPort, WorldPort};

/// Owner of every actor not registered otherwise.
pub const LOCAL_PLAYER: &str = "local";

#[derive(Debug, Clone, Default)]
pub struct StaticWorld {
    owners: HashMap<ActorId, String>,
    /// Players at war with everyone else
    hostile_players: HashSet<String>,
    selected: HashSet<ActorId>,
    /// dock -> actor holding the reservation
    reservations: HashMap<ActorId, ActorId>,
}

impl StaticWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_owner(&mut self, actor: ActorId, player: impl Into<String>) {
        self.owners.insert(actor, player.into());
    }

    pub fn declare_hostile(&mut self, player: impl Into<String>) {
        self.hostile_players.insert(player.into());
    }

    pub fn select(&mut self, actor: ActorId) {
        self.selected.insert(actor);
    }

    pub fn reserve(&mut self, dock: ActorId, by: ActorId) {
        self.reservations.insert(dock, by);
    }

    pub fn release(&mut self, dock: ActorId) {
        self.reservations.remove(&dock);
    }

    pub fn owner_of(&self, actor: ActorId) -> &str {
        self.owners
            .get(&actor)
            .map(String::as_str)
            .unwrap_or(LOCAL_PLAYER)
    }
}

impl WorldPort for StaticWorld {
    fn appears_hostile_to(&self, issuer: ActorId, other: ActorId) -> bool {
        let (a, b) = (self.owner_of(issuer), self.owner_of(other));
        a != b && (self.hostile_players.contains(a) || self.hostile_players.contains(b))
    }

    fn same_owner(&self, a: ActorId, b: ActorId) -> bool {
        self.owner_of(a) == self.owner_of(b)
    }

    fn is_selected(&self, actor: ActorId) -> bool {
        self.selected.contains(&actor)
    }
}

impl ReservationPort for StaticWorld {
    fn is_available_for(&self, target: ActorId, issuer: ActorId) -> bool {
        self.reservations
            .get(&target)
            .is_none_or(|holder| *holder == issuer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostility_needs_different_owners_and_a_hostile_side() {
        let mut world = StaticWorld::new();
        let (me, ally, enemy) = (ActorId::new(), ActorId::new(), ActorId::new());
        world.set_owner(ally, "allies-2");
        world.set_owner(enemy, "soviet");
        world.declare_hostile("soviet");

        assert!(!world.appears_hostile_to(me, ally));
        assert!(world.appears_hostile_to(me, enemy));
        assert!(world.same_owner(me, ActorId::new()));
        assert!(!world.same_owner(me, ally));
    }

    #[test]
    fn reservations_block_other_actors_only() {
        let mut world = StaticWorld::new();
        let (dock, holder, other) = (ActorId::new(), ActorId::new(), ActorId::new());

        assert!(world.is_available_for(dock, other));
        world.reserve(dock, holder);
        assert!(world.is_available_for(dock, holder));
        assert!(!world.is_available_for(dock, other));
        world.release(dock);
        assert!(world.is_available_for(dock, other));
    }
}
