//! Airlift Domain - vocabulary for actors that must transform before obeying
//! move and enter orders.
//!
//! Pure data: no logging, no I/O. The engine crate owns the behavior.

extern crate self as airlift_domain;

pub mod activity;
pub mod config;
pub mod error;
pub mod ids;
pub mod orders;
pub mod target;
pub mod value_objects;

pub use activity::{ActivityRef, TransformTask};
pub use config::TransformOrdersConfig;
pub use error::DomainError;
pub use ids::{ActorId, TaskId};
pub use orders::{DeferredOrder, Order, OrderKind};
pub use target::{ActorRef, Target, TargetType};
pub use value_objects::{
    CellPos, ConditionExpr, CursorName, LineColor, TargetModifiers, VoiceName, WorldPos,
};
