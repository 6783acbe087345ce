//! Order handling for actors that must transform before obeying.
//!
//! A deployed helipad cannot fly, so a move or enter order given to it is
//! parked on a transform task and re-issued once the actor has become an
//! aircraft. The pieces:
//!
//! - `gate` - condition-driven enable switch; everything no-ops while off
//! - `targeting` - the Enter and Move targeters offered to the input system
//! - `issue` - turns a chosen targeter into an [`Order`](airlift_domain::Order)
//! - `resolve` - runs, defers, or drops an incoming order
//! - `voice` - acknowledgment voice for an order
//!
//! World queries are passed in per call through
//! [`WorldServices`](crate::infrastructure::ports::WorldServices).

mod gate;
mod issue;
mod resolve;
mod state;
mod targeting;
mod voice;

pub use gate::CapabilityGate;
pub use resolve::{DropReason, Resolution};
pub use state::OrderState;
pub use targeting::{TargetEvaluation, Targeter};

use std::sync::Arc;

use airlift_domain::{ActorId, TransformOrdersConfig};

use crate::infrastructure::ports::TransformCapability;

/// The order trait of one actor.
pub struct TransformOrders {
    actor: ActorId,
    config: Arc<TransformOrdersConfig>,
    gate: CapabilityGate,
    /// Fixed at construction, in declaration order
    transforms: Box<[Arc<dyn TransformCapability>]>,
}

impl TransformOrders {
    pub fn new(
        actor: ActorId,
        config: Arc<TransformOrdersConfig>,
        transforms: Vec<Arc<dyn TransformCapability>>,
    ) -> Self {
        let gate = CapabilityGate::new(config.requires_condition.clone());
        Self {
            actor,
            config,
            gate,
            transforms: transforms.into_boxed_slice(),
        }
    }

    pub fn actor(&self) -> ActorId {
        self.actor
    }

    pub fn config(&self) -> &TransformOrdersConfig {
        &self.config
    }

    pub fn gate(&self) -> &CapabilityGate {
        &self.gate
    }

    pub fn is_active(&self) -> bool {
        self.gate.is_active()
    }

    pub fn grant_condition(&mut self, token: &str) {
        if self.gate.grant(token) {
            self.log_gate_change(token);
        }
    }

    pub fn revoke_condition(&mut self, token: &str) {
        if self.gate.revoke(token) {
            self.log_gate_change(token);
        }
    }

    fn log_gate_change(&self, token: &str) {
        tracing::debug!(
            actor_id = %self.actor,
            condition = %token,
            active = self.gate.is_active(),
            "Transform order trait toggled by condition"
        );
    }

    /// First transform capability that is neither disabled nor paused.
    fn available_transform(&self) -> Option<&dyn TransformCapability> {
        self.transforms
            .iter()
            .find(|t| !t.is_disabled() && !t.is_paused())
            .map(|t| t.as_ref())
    }

    /// Whether the actor could start a transform right now.
    pub fn can_transform(&self) -> bool {
        self.available_transform().is_some()
    }
}
