//! A transform capability whose state is set by the simulation.

use std::sync::atomic::{AtomicBool, Ordering};

use airlift_domain::{ActorId, TransformTask};

use crate::infrastructure::ports::TransformCapability;

/// Deploys the actor into `into_type` (e.g. a helipad into a helicopter).
#[derive(Debug)]
pub struct DeployTransform {
    into_type: String,
    disabled: AtomicBool,
    paused: AtomicBool,
}

impl DeployTransform {
    pub fn new(into_type: impl Into<String>) -> Self {
        Self {
            into_type: into_type.into(),
            disabled: AtomicBool::new(false),
            paused: AtomicBool::new(false),
        }
    }

    pub fn into_type(&self) -> &str {
        &self.into_type
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::Relaxed);
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }
}

impl TransformCapability for DeployTransform {
    fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Relaxed)
    }

    fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    fn build_transform_task(&self, actor: ActorId) -> TransformTask {
        TransformTask::new(actor, self.into_type.as_str())
    }
}
