//! Targeters offered to the input system.
//!
//! The set is closed: an actor that transforms before obeying can be sent
//! to enter a dock or to move to a cell, nothing else.

use std::cmp::Reverse;

use airlift_domain::{OrderKind, Target, TargetModifiers, TargetType};

use super::{OrderState, TransformOrders};
use crate::infrastructure::ports::{ActivityPort, WorldServices};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Targeter {
    Enter,
    Move,
}

impl Targeter {
    pub const fn kind(self) -> OrderKind {
        match self {
            Targeter::Enter => OrderKind::Enter,
            Targeter::Move => OrderKind::Move,
        }
    }

    pub const fn order_id(self) -> &'static str {
        self.kind().as_str()
    }

    pub const fn priority(self) -> i32 {
        self.kind().priority()
    }

    /// Holding force-queue appends the order instead of interrupting.
    pub fn is_queued(self, modifiers: TargetModifiers) -> bool {
        modifiers.contains(TargetModifiers::FORCE_QUEUE)
    }
}

/// A targeter that accepted a candidate target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetEvaluation {
    pub targeter: Targeter,
    pub cursor: String,
    pub queued: bool,
}

impl TargetEvaluation {
    pub fn priority(&self) -> i32 {
        self.targeter.priority()
    }
}

impl TransformOrders {
    /// Targeters on offer. Empty while the trait is disabled.
    pub fn targeters(&self) -> Vec<Targeter> {
        if !self.is_active() {
            return Vec::new();
        }
        vec![Targeter::Enter, Targeter::Move]
    }

    /// Evaluate one targeter against a candidate target.
    ///
    /// `None` means the targeter is not offered for this target.
    pub fn can_target(
        &self,
        targeter: Targeter,
        services: WorldServices<'_>,
        activity: &dyn ActivityPort,
        target: &Target,
        modifiers: TargetModifiers,
    ) -> Option<TargetEvaluation> {
        if !self.is_active() {
            return None;
        }
        let cursor = match targeter {
            Targeter::Enter => self.enter_cursor(services, target, modifiers)?,
            Targeter::Move => self.move_cursor(services, activity, target, modifiers)?,
        };
        Some(TargetEvaluation {
            targeter,
            cursor,
            queued: targeter.is_queued(modifiers),
        })
    }

    /// Every targeter that accepts the target, highest priority first.
    pub fn legal_targeters(
        &self,
        services: WorldServices<'_>,
        activity: &dyn ActivityPort,
        target: &Target,
        modifiers: TargetModifiers,
    ) -> Vec<TargetEvaluation> {
        let mut legal: Vec<_> = self
            .targeters()
            .into_iter()
            .filter_map(|t| self.can_target(t, services, activity, target, modifiers))
            .collect();
        legal.sort_by_key(|evaluation| Reverse(evaluation.priority()));
        legal
    }

    /// Whether the targeter should win over selecting the actor under the
    /// cursor.
    ///
    /// Move orders take priority over selecting someone else's actors, or own
    /// actors that are already selected. Otherwise only force-move overrides.
    pub fn target_overrides_selection(
        &self,
        targeter: Targeter,
        services: WorldServices<'_>,
        target: &Target,
        modifiers: TargetModifiers,
    ) -> bool {
        match targeter {
            Targeter::Enter => false,
            Targeter::Move => {
                if let Some(actor) = target.as_actor() {
                    if !services.world.same_owner(self.actor, actor.id)
                        || services.world.is_selected(actor.id)
                    {
                        return true;
                    }
                }
                modifiers.contains(TargetModifiers::FORCE_MOVE)
            }
        }
    }

    fn force_move_satisfied(&self, modifiers: TargetModifiers) -> bool {
        !self.config.requires_force_move || modifiers.contains(TargetModifiers::FORCE_MOVE)
    }

    fn enter_cursor(
        &self,
        services: WorldServices<'_>,
        target: &Target,
        modifiers: TargetModifiers,
    ) -> Option<String> {
        let dock = target.as_actor()?;
        if !self.force_move_satisfied(modifiers) || !self.config.can_dock_at(&dock.type_name) {
            return None;
        }
        if services.world.appears_hostile_to(self.actor, dock.id) {
            return None;
        }
        if !services.reservations.is_available_for(dock.id, self.actor) {
            return None;
        }
        Some(self.config.enter_cursor.to_string())
    }

    // The cursor is advisory: an unreachable cell still yields a Move order,
    // which resolution then drops.
    fn move_cursor(
        &self,
        services: WorldServices<'_>,
        activity: &dyn ActivityPort,
        target: &Target,
        modifiers: TargetModifiers,
    ) -> Option<String> {
        if target.target_type() != TargetType::Terrain || !self.force_move_satisfied(modifiers) {
            return None;
        }
        let cell = services.map.cell_containing(target.center_position()?);
        let blocked = || self.config.blocked_cursor.to_string();

        if !services.map.contains(cell) {
            return Some(blocked());
        }

        let in_flight = OrderState::observe(activity).in_flight_task().is_some();
        if !in_flight && !self.can_transform() {
            return Some(blocked());
        }
        if !self.config.move_into_shroud && !services.shroud.is_explored(cell) {
            return Some(blocked());
        }

        Some(
            services
                .map
                .terrain_cursor(cell)
                .unwrap_or_else(|| self.config.cursor.to_string()),
        )
    }
}
