//! Input modifiers held while the player picks a target

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Set of modifier keys held at targeting time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct TargetModifiers: u8 {
        const FORCE_ATTACK = 1;
        /// Append to the actor's queue instead of replacing its current activity.
        const FORCE_QUEUE = 1 << 1;
        const FORCE_MOVE = 1 << 2;
    }
}

impl Default for TargetModifiers {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_modifiers_contain_each_part() {
        let held = TargetModifiers::FORCE_MOVE | TargetModifiers::FORCE_QUEUE;
        assert!(held.contains(TargetModifiers::FORCE_MOVE));
        assert!(held.contains(TargetModifiers::FORCE_QUEUE));
        assert!(!held.contains(TargetModifiers::FORCE_ATTACK));
        assert!(TargetModifiers::default().is_empty());
    }

    #[test]
    fn serializes_as_flag_names() {
        let held = TargetModifiers::FORCE_MOVE | TargetModifiers::FORCE_QUEUE;
        let json = serde_json::to_string(&held).unwrap();
        let parsed: TargetModifiers = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, held);
        assert!(json.contains("FORCE_MOVE"));
    }
}
