//! Shared context for flow tests.

use airlift_domain::{CellPos, Order, Target, TargetModifiers, TransformOrdersConfig};

use crate::infrastructure::{Activity, ActivityQueue};
use crate::orders::{Resolution, TargetEvaluation, TransformOrders};
use crate::test_fixtures::{dock_target, terrain_target, FakeServices, TransformFixture};

/// What happened when the player clicked.
#[derive(Debug)]
pub struct Click {
    pub evaluation: TargetEvaluation,
    pub order: Order,
    pub resolution: Resolution,
}

/// One actor on an 8x8 map, fully revealed.
pub struct FlowContext {
    pub fake: FakeServices,
    pub activity: ActivityQueue,
    pub orders: TransformOrders,
}

impl FlowContext {
    pub fn new(config: TransformOrdersConfig) -> Self {
        Self::with_orders(TransformFixture::new(config).with_ready_transform().build())
    }

    pub fn with_orders(orders: TransformOrders) -> Self {
        let mut fake = FakeServices::new(8, 8);
        fake.map.reveal_all();
        Self {
            fake,
            activity: ActivityQueue::new(),
            orders,
        }
    }

    pub fn cell(&self, x: i32, y: i32) -> Target {
        terrain_target(CellPos::new(x, y))
    }

    pub fn dock(&self, type_name: &str, x: i32, y: i32) -> Target {
        dock_target(type_name, CellPos::new(x, y)).1
    }

    /// Evaluate, issue and resolve the best targeter for `target`.
    ///
    /// `None` when no targeter accepts the target.
    pub fn click(&mut self, target: Target, modifiers: TargetModifiers) -> Option<Click> {
        let services = self.fake.services();
        let evaluation = self
            .orders
            .legal_targeters(services, &self.activity, &target, modifiers)
            .into_iter()
            .next()?;
        let order = self.orders.issue_evaluated(&evaluation, target)?;
        let resolution = self
            .orders
            .resolve_order(services, &mut self.activity, &order);
        Some(Click {
            evaluation,
            order,
            resolution,
        })
    }

    pub fn deliver(&mut self, order: &Order) -> Resolution {
        self.orders
            .resolve_order(self.fake.services(), &mut self.activity, order)
    }

    /// Complete the running activity, returning the orders it releases.
    pub fn finish_current(&mut self) -> Vec<Order> {
        self.activity
            .complete_current()
            .map(Activity::into_replay)
            .unwrap_or_default()
    }

    pub fn line_count(&self) -> usize {
        self.fake.lines.len()
    }
}
