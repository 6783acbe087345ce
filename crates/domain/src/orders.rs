//! Order vocabulary: order kinds, issued orders and deferred orders

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::target::Target;
use crate::value_objects::LineColor;

/// The order kinds handled by actors that transform before obeying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderKind {
    /// Fly to a terrain cell
    Move,
    /// Land on a dock (e.g. a helipad)
    Enter,
}

impl OrderKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderKind::Move => "Move",
            OrderKind::Enter => "Enter",
        }
    }

    /// Priority used by the input system when several targeters apply to the
    /// same cursor position. Higher wins.
    pub const fn priority(self) -> i32 {
        match self {
            OrderKind::Enter => 5,
            OrderKind::Move => 4,
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Move" => Ok(OrderKind::Move),
            "Enter" => Ok(OrderKind::Enter),
            _ => Err(DomainError::parse(format!("Unknown order kind: {}", s))),
        }
    }
}

/// An order as delivered to an actor.
///
/// Orders are broadcast to every order-handling trait on the actor, so the
/// order string is kept verbatim: kinds this trait does not know are ignored,
/// not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_string: String,
    #[serde(default)]
    pub target: Target,
    /// Append to the activity queue instead of interrupting the current activity
    #[serde(default)]
    pub queued: bool,
}

impl Order {
    pub fn new(kind: OrderKind, target: Target, queued: bool) -> Self {
        Self {
            order_string: kind.as_str().to_string(),
            target,
            queued,
        }
    }

    /// An order of a kind owned by some other trait.
    pub fn foreign(order_string: impl Into<String>, target: Target, queued: bool) -> Self {
        Self {
            order_string: order_string.into(),
            target,
            queued,
        }
    }

    pub fn kind(&self) -> Option<OrderKind> {
        self.order_string.parse().ok()
    }
}

/// An order parked on a transform task, re-issued once the transform ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeferredOrder {
    pub kind: OrderKind,
    pub target: Target,
    /// Color of the target line redrawn when the order is re-issued
    pub line_color: LineColor,
}

impl DeferredOrder {
    pub fn new(kind: OrderKind, target: Target, line_color: LineColor) -> Self {
        Self {
            kind,
            target,
            line_color,
        }
    }

    /// The order to issue after the transform. Always queued so that replayed
    /// orders run one after another in deferral order.
    pub fn to_order(&self) -> Order {
        Order::new(self.kind, self.target.clone(), true)
    }
}
