//! Configuration for the transform-before-obeying order trait
//!
//! Loaded from the actor definition. Every field has a default, so an empty
//! object is a valid configuration:
//!
//! ```
//! use airlift_domain::TransformOrdersConfig;
//!
//! let config: TransformOrdersConfig = serde_json::from_str("{}").unwrap();
//! assert!(config.move_into_shroud);
//! assert_eq!(config.voice.as_str(), "Action");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::DomainError;
use crate::value_objects::{ConditionExpr, CursorName, LineColor, VoiceName};

// =============================================================================
// Defaults
// =============================================================================

fn default_voice() -> VoiceName {
    VoiceName::from_static("Action")
}

fn default_enter_cursor() -> CursorName {
    CursorName::from_static("enter")
}

fn default_cursor() -> CursorName {
    CursorName::from_static("move")
}

fn default_blocked_cursor() -> CursorName {
    CursorName::from_static("move-blocked")
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Trait Configuration
// =============================================================================

/// Static configuration of an actor's order trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOrdersConfig {
    /// Actor types this actor may enter (exact type-name match)
    #[serde(default)]
    pub dock_actors: BTreeSet<String>,
    /// Voice played when an order is acknowledged (default: "Action")
    #[serde(default = "default_voice")]
    pub voice: VoiceName,
    /// Color of target lines drawn for accepted orders (default: green)
    #[serde(default)]
    pub target_line_color: LineColor,
    /// Only offer orders while the force-move modifier is held
    #[serde(default)]
    pub requires_force_move: bool,
    /// Allow moving into cells the owner has never explored (default: true)
    #[serde(default = "default_true")]
    pub move_into_shroud: bool,
    #[serde(default = "default_enter_cursor")]
    pub enter_cursor: CursorName,
    /// Move cursor used when the terrain has no custom cursor
    #[serde(default = "default_cursor")]
    pub cursor: CursorName,
    #[serde(default = "default_blocked_cursor")]
    pub blocked_cursor: CursorName,
    /// Conditions that must hold for the trait to be enabled. `None` = always.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_condition: Option<ConditionExpr>,
}

impl Default for TransformOrdersConfig {
    fn default() -> Self {
        Self {
            dock_actors: BTreeSet::new(),
            voice: default_voice(),
            target_line_color: LineColor::default(),
            requires_force_move: false,
            move_into_shroud: true,
            enter_cursor: default_enter_cursor(),
            cursor: default_cursor(),
            blocked_cursor: default_blocked_cursor(),
            requires_condition: None,
        }
    }
}

impl TransformOrdersConfig {
    /// Check rules that serde cannot express on its own.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = self.dock_actors.iter().find(|name| name.trim().is_empty()) {
            return Err(DomainError::validation(format!(
                "dockActors contains an empty actor type name: {:?}",
                name
            )));
        }
        if let Some(name) = self
            .dock_actors
            .iter()
            .find(|name| name.trim() != name.as_str())
        {
            return Err(DomainError::validation(format!(
                "dockActors entry {:?} has surrounding whitespace",
                name
            )));
        }
        Ok(())
    }

    pub fn with_dock_actor(mut self, type_name: impl Into<String>) -> Self {
        self.dock_actors.insert(type_name.into());
        self
    }

    pub fn with_move_into_shroud(mut self, allowed: bool) -> Self {
        self.move_into_shroud = allowed;
        self
    }

    pub fn with_requires_force_move(mut self, required: bool) -> Self {
        self.requires_force_move = required;
        self
    }

    pub fn with_requires_condition(mut self, condition: ConditionExpr) -> Self {
        self.requires_condition = Some(condition);
        self
    }

    /// Exact-match membership test against the dock allow-list.
    pub fn can_dock_at(&self, type_name: &str) -> bool {
        self.dock_actors.contains(type_name)
    }
}
