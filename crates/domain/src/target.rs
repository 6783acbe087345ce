//! Order targets

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::ActorId;
use crate::value_objects::{CellPos, WorldPos};

/// Discriminant of a [`Target`], for quick checks without matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    None,
    Terrain,
    Actor,
}

/// An actor as seen by the player issuing an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorRef {
    pub id: ActorId,
    /// Actor type name, matched against the dock allow-list
    pub type_name: String,
    pub position: WorldPos,
}

impl ActorRef {
    pub fn new(id: ActorId, type_name: impl Into<String>, position: WorldPos) -> Self {
        Self {
            id,
            type_name: type_name.into(),
            position,
        }
    }
}

/// What an order points at.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Target {
    #[default]
    None,
    Terrain {
        cell: CellPos,
        position: WorldPos,
    },
    Actor(ActorRef),
}

impl Target {
    pub fn terrain(cell: CellPos, position: WorldPos) -> Self {
        Self::Terrain { cell, position }
    }

    pub fn actor(actor: ActorRef) -> Self {
        Self::Actor(actor)
    }

    pub fn target_type(&self) -> TargetType {
        match self {
            Target::None => TargetType::None,
            Target::Terrain { .. } => TargetType::Terrain,
            Target::Actor(_) => TargetType::Actor,
        }
    }

    /// World position the target is centered on. `None` for an empty target.
    pub fn center_position(&self) -> Option<WorldPos> {
        match self {
            Target::None => None,
            Target::Terrain { position, .. } => Some(*position),
            Target::Actor(actor) => Some(actor.position),
        }
    }

    pub fn as_actor(&self) -> Option<&ActorRef> {
        match self {
            Target::Actor(actor) => Some(actor),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Target::None)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::None => write!(f, "none"),
            Target::Terrain { cell, .. } => write!(f, "terrain {}", cell),
            Target::Actor(actor) => write!(f, "actor {} ({})", actor.type_name, actor.id),
        }
    }
}
