//! Activity engine and transform capability ports.

use airlift_domain::{ActivityRef, ActorId, DeferredOrder, TaskId, TransformTask};

// =============================================================================
// Activity Engine
// =============================================================================

/// Per-actor FIFO of activities, run to completion by the simulation.
///
/// The order resolver reads the current slot to tell whether a transform is
/// in flight, and writes at most once per order.
#[cfg_attr(test, mockall::automock)]
pub trait ActivityPort: Send {
    /// The activity occupying the actor's primary slot.
    fn current_activity(&self) -> Option<ActivityRef>;

    /// Hand a freshly built transform task to the engine.
    ///
    /// `queued = false` interrupts whatever the actor is doing; `true`
    /// appends behind it.
    fn queue_activity(&mut self, queued: bool, task: TransformTask);

    /// Append a deferred order to a transform task the engine already owns.
    ///
    /// Returns `false` when no such task is queued.
    fn append_deferred(&mut self, task: TaskId, order: DeferredOrder) -> bool;
}

// =============================================================================
// Transform Capability
// =============================================================================

/// One way an actor can transform (e.g. a helipad deploying into a
/// helicopter). Actors may carry several; the first enabled and unpaused one
/// is used.
#[cfg_attr(test, mockall::automock)]
pub trait TransformCapability: Send + Sync {
    fn is_disabled(&self) -> bool;
    fn is_paused(&self) -> bool;

    /// Build a transform task for `actor`. The task is not queued yet.
    fn build_transform_task(&self, actor: ActorId) -> TransformTask;
}
