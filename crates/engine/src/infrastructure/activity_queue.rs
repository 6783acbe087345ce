//! In-memory activity engine for a single actor.

use std::collections::VecDeque;

use airlift_domain::{ActivityRef, DeferredOrder, Order, TaskId, TransformTask};

use crate::infrastructure::ports::ActivityPort;

/// An activity queued on the actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    Transform(TransformTask),
    /// Anything this crate does not model (hovering, idling, ...)
    Other { id: TaskId, name: String },
}

impl Activity {
    pub fn id(&self) -> TaskId {
        match self {
            Activity::Transform(task) => task.id(),
            Activity::Other { id, .. } => *id,
        }
    }

    /// Orders to re-issue once this activity has finished, in the order
    /// they were deferred.
    pub fn into_replay(self) -> Vec<Order> {
        match self {
            Activity::Transform(task) => task
                .into_deferred()
                .iter()
                .map(DeferredOrder::to_order)
                .collect(),
            Activity::Other { .. } => Vec::new(),
        }
    }

    fn to_activity_ref(&self) -> ActivityRef {
        match self {
            Activity::Transform(task) => ActivityRef::Transform(task.id()),
            Activity::Other { id, .. } => ActivityRef::Other(*id),
        }
    }
}

/// FIFO of activities. The head is the activity currently running.
///
/// Queuing with `queued = false` cancels everything queued so far, the
/// running activity included.
#[derive(Debug, Clone, Default)]
pub struct ActivityQueue {
    activities: VecDeque<Activity>,
}

impl ActivityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    /// Queue an activity this crate does not model, returning its id.
    pub fn queue_other(&mut self, queued: bool, name: impl Into<String>) -> TaskId {
        let id = TaskId::new();
        self.push(queued, Activity::Other { id, name: name.into() });
        id
    }

    /// Finish the running activity and start the next one.
    pub fn complete_current(&mut self) -> Option<Activity> {
        let finished = self.activities.pop_front()?;
        tracing::trace!(
            task_id = %finished.id(),
            remaining = self.activities.len(),
            "Activity completed"
        );
        Some(finished)
    }

    fn push(&mut self, queued: bool, activity: Activity) {
        if !queued && !self.activities.is_empty() {
            tracing::trace!(cancelled = self.activities.len(), "Activities cancelled");
            self.activities.clear();
        }
        self.activities.push_back(activity);
    }
}

impl ActivityPort for ActivityQueue {
    fn current_activity(&self) -> Option<ActivityRef> {
        self.activities.front().map(Activity::to_activity_ref)
    }

    fn queue_activity(&mut self, queued: bool, task: TransformTask) {
        self.push(queued, Activity::Transform(task));
    }

    fn append_deferred(&mut self, task: TaskId, order: DeferredOrder) -> bool {
        let transform = self.activities.iter_mut().find_map(|activity| match activity {
            Activity::Transform(t) if t.id() == task => Some(t),
            _ => None,
        });
        match transform {
            Some(t) => {
                t.queue_deferred(order);
                true
            }
            None => false,
        }
    }
}
