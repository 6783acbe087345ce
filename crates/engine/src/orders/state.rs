//! Order state of an actor, derived from its activity slot.

use airlift_domain::TaskId;

use crate::infrastructure::ports::ActivityPort;

/// Whether a transform is currently running on the actor.
///
/// Always computed from the activity engine, never stored, so it cannot
/// drift from what the engine is actually running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderState {
    Idle,
    TransformInFlight(TaskId),
}

impl OrderState {
    pub fn observe(activity: &dyn ActivityPort) -> Self {
        match activity
            .current_activity()
            .and_then(|current| current.as_transform())
        {
            Some(task) => OrderState::TransformInFlight(task),
            None => OrderState::Idle,
        }
    }

    pub fn in_flight_task(self) -> Option<TaskId> {
        match self {
            OrderState::TransformInFlight(task) => Some(task),
            OrderState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockActivityPort;
    use airlift_domain::ActivityRef;

    #[test]
    fn empty_slot_is_idle() {
        let mut activity = MockActivityPort::new();
        activity.expect_current_activity().returning(|| None);

        assert_eq!(OrderState::observe(&activity), OrderState::Idle);
    }

    #[test]
    fn non_transform_activity_is_idle() {
        let mut activity = MockActivityPort::new();
        activity
            .expect_current_activity()
            .returning(|| Some(ActivityRef::Other(TaskId::new())));

        assert_eq!(OrderState::observe(&activity), OrderState::Idle);
    }

    #[test]
    fn transform_activity_is_in_flight() {
        let task = TaskId::new();
        let mut activity = MockActivityPort::new();
        activity
            .expect_current_activity()
            .returning(move || Some(ActivityRef::Transform(task)));

        let state = OrderState::observe(&activity);
        assert_eq!(state, OrderState::TransformInFlight(task));
        assert_eq!(state.in_flight_task(), Some(task));
    }
}
