//! Acknowledgment voice for orders.

use airlift_domain::{Order, OrderKind, VoiceName};

use super::TransformOrders;
use crate::infrastructure::ports::WorldServices;

impl TransformOrders {
    /// Voice to play when `order` is given, or `None` for silence.
    pub fn voice_for_order(
        &self,
        services: WorldServices<'_>,
        order: &Order,
    ) -> Option<&VoiceName> {
        if !self.is_active() {
            return None;
        }
        match order.kind()? {
            OrderKind::Move => {
                // Only a target that resolves to a cell can be under shroud.
                let unexplored = order.target.center_position().is_some_and(|position| {
                    !services
                        .shroud
                        .is_explored(services.map.cell_containing(position))
                });
                if !self.config.move_into_shroud && unexplored {
                    return None;
                }
                Some(&self.config.voice)
            }
            OrderKind::Enter => Some(&self.config.voice),
        }
    }
}
