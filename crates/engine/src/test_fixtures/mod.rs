//! Common test helpers: in-memory world services, targets and a builder
//! for the order trait.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{terrain_target, FakeServices, TransformFixture};
//!
//! #[test]
//! fn move_is_offered() {
//!     let orders = TransformFixture::new(TransformOrdersConfig::default())
//!         .with_ready_transform()
//!         .build();
//!     let fake = FakeServices::new(8, 8);
//!     // ... test logic
//! }
//! ```

use std::sync::Arc;

use airlift_domain::{ActorId, ActorRef, CellPos, Target, TransformOrdersConfig};

use crate::infrastructure::ports::{TransformCapability, WorldServices};
use crate::infrastructure::{ActivityQueue, DeployTransform, GridMap, RecordedLines, StaticWorld};
use crate::orders::TransformOrders;

// =============================================================================
// World Services
// =============================================================================

/// In-memory world: a fully shrouded map, everyone friendly, nothing
/// reserved or selected.
pub struct FakeServices {
    pub map: GridMap,
    pub world: StaticWorld,
    pub lines: RecordedLines,
}

impl FakeServices {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            map: GridMap::new(width, height),
            world: StaticWorld::new(),
            lines: RecordedLines::new(),
        }
    }

    pub fn services(&self) -> WorldServices<'_> {
        WorldServices {
            map: &self.map,
            shroud: &self.map,
            world: &self.world,
            reservations: &self.world,
            target_lines: &self.lines,
        }
    }
}

pub fn idle_activity() -> ActivityQueue {
    ActivityQueue::new()
}

// =============================================================================
// Targets
// =============================================================================

pub fn terrain_target(cell: CellPos) -> Target {
    Target::terrain(cell, GridMap::center_of(cell))
}

/// A dock actor standing on `cell`, returned with its id.
pub fn dock_target(type_name: &str, cell: CellPos) -> (ActorId, Target) {
    let id = ActorId::new();
    let actor = ActorRef::new(id, type_name, GridMap::center_of(cell));
    (id, Target::actor(actor))
}

// =============================================================================
// Order Trait Builder
// =============================================================================

pub struct TransformFixture {
    config: TransformOrdersConfig,
    transforms: Vec<Arc<dyn TransformCapability>>,
}

impl TransformFixture {
    pub fn new(config: TransformOrdersConfig) -> Self {
        Self {
            config,
            transforms: Vec::new(),
        }
    }

    /// Add an enabled, unpaused transform into a transport helicopter.
    pub fn with_ready_transform(self) -> Self {
        self.with_transform(Arc::new(DeployTransform::new("tran")))
    }

    pub fn with_transform(mut self, transform: Arc<dyn TransformCapability>) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn build(self) -> TransformOrders {
        TransformOrders::new(ActorId::new(), Arc::new(self.config), self.transforms)
    }
}
