//! Value objects - Immutable objects defined by their attributes

mod condition;
mod line_color;
mod modifiers;
mod names;
mod position;

pub use condition::ConditionExpr;
pub use line_color::LineColor;
pub use modifiers::TargetModifiers;
pub use names::{CursorName, VoiceName};
pub use position::{CellPos, WorldPos};
