//! Condition-driven enable switch for the order trait.

use std::collections::HashMap;

use airlift_domain::ConditionExpr;

/// Tracks the conditions granted to an actor and whether the trait's
/// `requiresCondition` currently holds.
///
/// Grants are counted: a token granted by two sources stays granted until
/// both revoke it.
#[derive(Debug, Clone)]
pub struct CapabilityGate {
    requires: Option<ConditionExpr>,
    granted: HashMap<String, u32>,
    active: bool,
}

impl CapabilityGate {
    pub fn new(requires: Option<ConditionExpr>) -> Self {
        let mut gate = Self {
            requires,
            granted: HashMap::new(),
            active: true,
        };
        gate.refresh();
        gate
    }

    pub fn always_active() -> Self {
        Self::new(None)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_granted(&self, token: &str) -> bool {
        self.granted.get(token).is_some_and(|count| *count > 0)
    }

    /// Grant a condition token. Returns `true` if the gate flipped.
    pub fn grant(&mut self, token: &str) -> bool {
        *self.granted.entry(token.to_string()).or_insert(0) += 1;
        self.refresh()
    }

    /// Revoke one grant of a token. Returns `true` if the gate flipped.
    ///
    /// Revoking a token that was never granted is a no-op.
    pub fn revoke(&mut self, token: &str) -> bool {
        match self.granted.get_mut(token) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                self.granted.remove(token);
            }
            None => return false,
        }
        self.refresh()
    }

    fn refresh(&mut self) -> bool {
        let active = match &self.requires {
            Some(expr) => expr.evaluate(|token| self.is_granted(token)),
            None => true,
        };
        let changed = active != self.active;
        self.active = active;
        changed
    }
}

impl Default for CapabilityGate {
    fn default() -> Self {
        Self::always_active()
    }
}
