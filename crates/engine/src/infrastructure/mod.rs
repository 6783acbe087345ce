//! Infrastructure implementations.
//!
//! In-memory implementations of the ports, used by the scenario runner and
//! by tests. A game embedding the engine supplies its own.

pub mod activity_queue;
pub mod deploy_transform;
pub mod grid_map;
pub mod ports;
pub mod static_world;
pub mod target_lines;

pub use activity_queue::{Activity, ActivityQueue};
pub use deploy_transform::DeployTransform;
pub use grid_map::{GridMap, CELL_SIZE};
pub use static_world::{StaticWorld, LOCAL_PLAYER};
pub use target_lines::RecordedLines;
