//! Activity-slot vocabulary shared between the order resolver and the
//! activity engine.

use serde::{Deserialize, Serialize};

use crate::ids::{ActorId, TaskId};
use crate::orders::DeferredOrder;

/// What currently occupies an actor's primary activity slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityRef {
    /// A transform task that deferred orders may attach to
    Transform(TaskId),
    /// Any other activity (flying, idling, attacking...)
    Other(TaskId),
}

impl ActivityRef {
    pub fn task_id(&self) -> TaskId {
        match self {
            ActivityRef::Transform(id) | ActivityRef::Other(id) => *id,
        }
    }

    /// The task id if this activity is a transform.
    pub fn as_transform(&self) -> Option<TaskId> {
        match self {
            ActivityRef::Transform(id) => Some(*id),
            ActivityRef::Other(_) => None,
        }
    }
}

/// A transform process plus the orders waiting for it to finish.
///
/// Built by a transform capability, then handed to the activity engine.
/// Deferred orders are kept in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformTask {
    id: TaskId,
    actor: ActorId,
    /// Actor type produced by the transform
    into_type: String,
    deferred: Vec<DeferredOrder>,
}

impl TransformTask {
    pub fn new(actor: ActorId, into_type: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            actor,
            into_type: into_type.into(),
            deferred: Vec::new(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn actor(&self) -> ActorId {
        self.actor
    }

    pub fn into_type(&self) -> &str {
        &self.into_type
    }

    pub fn deferred(&self) -> &[DeferredOrder] {
        &self.deferred
    }

    /// Append an order to run after this transform, behind any already queued.
    pub fn queue_deferred(&mut self, order: DeferredOrder) {
        self.deferred.push(order);
    }

    pub fn into_deferred(self) -> Vec<DeferredOrder> {
        self.deferred
    }
}
