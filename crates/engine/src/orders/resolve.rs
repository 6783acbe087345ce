//! Order resolution and deferral.
//!
//! An actor that has not transformed yet cannot obey a move or enter order
//! itself. The order is attached to a transform task instead: the one already
//! in flight if there is one, otherwise a freshly built task that is queued on
//! the actor. Orders that can never be carried out are dropped without error.

use std::fmt;

use airlift_domain::{DeferredOrder, Order, OrderKind, TaskId, Target};

use super::{OrderState, TransformOrders};
use crate::infrastructure::ports::{ActivityPort, WorldServices};

/// Why an order was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The trait is disabled by a condition
    TraitDisabled,
    /// The order kind belongs to another trait
    NotHandled,
    /// Move order without a position to move to
    NoDestination,
    /// Move destination is shrouded and moving into shroud is not allowed
    UnexploredDestination,
    /// Enter order whose target is not an actor
    TargetNotActor,
    /// No transform in flight and none that can be started
    NoTransform,
    /// The in-flight transform refused the deferred order
    TransformGone,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            DropReason::TraitDisabled => "trait disabled",
            DropReason::NotHandled => "not handled",
            DropReason::NoDestination => "no destination",
            DropReason::UnexploredDestination => "unexplored destination",
            DropReason::TargetNotActor => "target is not an actor",
            DropReason::NoTransform => "no transform available",
            DropReason::TransformGone => "transform task gone",
        };
        f.write_str(reason)
    }
}

/// Outcome of [`TransformOrders::resolve_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Appended to the transform that was already running
    Deferred { task: TaskId },
    /// A new transform was built with the order attached, and queued
    TransformStarted { task: TaskId },
    Dropped(DropReason),
}

impl Resolution {
    pub fn is_dropped(&self) -> bool {
        matches!(self, Resolution::Dropped(_))
    }

    /// The transform task the order now waits on.
    pub fn task(&self) -> Option<TaskId> {
        match self {
            Resolution::Deferred { task } | Resolution::TransformStarted { task } => Some(*task),
            Resolution::Dropped(_) => None,
        }
    }
}

impl TransformOrders {
    /// Resolve an order delivered to this actor.
    ///
    /// Must run to completion before the actor handles another order; the
    /// `&mut` borrow of the activity engine enforces that.
    pub fn resolve_order(
        &self,
        services: WorldServices<'_>,
        activity: &mut dyn ActivityPort,
        order: &Order,
    ) -> Resolution {
        let resolution = self.resolve(services, activity, order);
        match resolution {
            Resolution::Dropped(DropReason::NotHandled) => {}
            Resolution::Dropped(reason) => tracing::debug!(
                actor_id = %self.actor,
                order = %order.order_string,
                target = %order.target,
                reason = %reason,
                "Order dropped"
            ),
            Resolution::Deferred { task } => tracing::debug!(
                actor_id = %self.actor,
                order = %order.order_string,
                task_id = %task,
                "Order deferred onto in-flight transform"
            ),
            Resolution::TransformStarted { task } => tracing::debug!(
                actor_id = %self.actor,
                order = %order.order_string,
                task_id = %task,
                queued = order.queued,
                "Transform queued with deferred order"
            ),
        }
        resolution
    }

    fn resolve(
        &self,
        services: WorldServices<'_>,
        activity: &mut dyn ActivityPort,
        order: &Order,
    ) -> Resolution {
        if !self.is_active() {
            return Resolution::Dropped(DropReason::TraitDisabled);
        }
        let Some(kind) = order.kind() else {
            return Resolution::Dropped(DropReason::NotHandled);
        };

        // 1. Validate and draw feedback
        if let Err(reason) = self.show_feedback(services, kind, &order.target) {
            return Resolution::Dropped(reason);
        }

        // 2. Find what to attach to
        let in_flight = OrderState::observe(activity).in_flight_task();
        let deferred =
            DeferredOrder::new(kind, order.target.clone(), self.config.target_line_color);

        match (in_flight, self.available_transform()) {
            (Some(task), _) => {
                // Already queued on the actor: append only, never re-queue.
                if activity.append_deferred(task, deferred) {
                    Resolution::Deferred { task }
                } else {
                    Resolution::Dropped(DropReason::TransformGone)
                }
            }
            (None, Some(transform)) => {
                let mut task = transform.build_transform_task(self.actor);
                task.queue_deferred(deferred);
                let id = task.id();
                activity.queue_activity(order.queued, task);
                Resolution::TransformStarted { task: id }
            }
            (None, None) => Resolution::Dropped(DropReason::NoTransform),
        }
    }

    // Target lines are best-effort: drawn before the transform lookup, so an
    // order dropped for lack of a transform may still have drawn one.
    fn show_feedback(
        &self,
        services: WorldServices<'_>,
        kind: OrderKind,
        target: &Target,
    ) -> Result<(), DropReason> {
        let color = self.config.target_line_color;
        match kind {
            OrderKind::Move => {
                let position = target.center_position().ok_or(DropReason::NoDestination)?;
                let cell = services.clamped_cell(position);
                if !self.config.move_into_shroud && !services.shroud.is_explored(cell) {
                    return Err(DropReason::UnexploredDestination);
                }
                let line_target = Target::terrain(cell, services.map.center_of_cell(cell));
                services.target_lines.draw_target_line(&line_target, color);
            }
            OrderKind::Enter => {
                let dock = target.as_actor().ok_or(DropReason::TargetNotActor)?;
                if services.reservations.is_available_for(dock.id, self.actor) {
                    services.target_lines.draw_target_line(target, color);
                }
            }
        }
        Ok(())
    }
}
