//! Order materialization.

use airlift_domain::{Order, OrderKind, Target};

use super::{TargetEvaluation, TransformOrders};

impl TransformOrders {
    /// Build the order for a chosen targeter.
    ///
    /// Returns an order even if the actor cannot currently reach the target:
    /// issuing and resolving may happen ticks apart, so the strict checks
    /// run again in [`resolve_order`](TransformOrders::resolve_order).
    /// Unknown targeter ids are not handled here and yield `None`.
    pub fn issue_order(&self, order_id: &str, target: Target, queued: bool) -> Option<Order> {
        if !self.is_active() {
            return None;
        }
        let kind: OrderKind = order_id.parse().ok()?;
        Some(Order::new(kind, target, queued))
    }

    /// Build the order for a targeter evaluation returned by
    /// [`can_target`](TransformOrders::can_target).
    pub fn issue_evaluated(&self, evaluation: &TargetEvaluation, target: Target) -> Option<Order> {
        self.issue_order(evaluation.targeter.order_id(), target, evaluation.queued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::Targeter;
    use crate::test_fixtures::{terrain_target, TransformFixture};
    use airlift_domain::{CellPos, TransformOrdersConfig};

    #[test]
    fn materializes_move_and_enter_without_validation() {
        let orders = TransformFixture::new(TransformOrdersConfig::default()).build();
        let target = terrain_target(CellPos::new(99, 99));

        let order = orders
            .issue_order("Move", target.clone(), true)
            .expect("move order");
        assert_eq!(order.kind(), Some(OrderKind::Move));
        assert_eq!(order.target, target);
        assert!(order.queued);

        // Terrain target for an Enter order: still materialized, dropped later.
        let order = orders
            .issue_order("Enter", target, false)
            .expect("enter order");
        assert_eq!(order.kind(), Some(OrderKind::Enter));
        assert!(!order.queued);
    }

    #[test]
    fn unknown_targeter_is_not_handled() {
        let orders = TransformFixture::new(TransformOrdersConfig::default()).build();
        assert!(orders.issue_order("Attack", Target::None, false).is_none());
        assert!(orders.issue_order("move", Target::None, false).is_none());
    }

    #[test]
    fn disabled_trait_issues_nothing() {
        let config = TransformOrdersConfig::default()
            .with_requires_condition("deployed".parse().expect("valid expression"));
        let orders = TransformFixture::new(config).build();
        assert!(orders.issue_order("Move", Target::None, false).is_none());
    }

    #[test]
    fn evaluation_carries_queue_flag() {
        let orders = TransformFixture::new(TransformOrdersConfig::default()).build();
        let evaluation = TargetEvaluation {
            targeter: Targeter::Move,
            cursor: "move".to_string(),
            queued: true,
        };
        let order = orders
            .issue_evaluated(&evaluation, terrain_target(CellPos::new(1, 1)))
            .expect("move order");
        assert!(order.queued);
        assert_eq!(order.order_string, "Move");
    }
}
