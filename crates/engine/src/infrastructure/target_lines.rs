//! Target-line sink that records what would have been drawn.

use std::sync::Mutex;

use airlift_domain::{LineColor, Target};

use crate::infrastructure::ports::TargetLinePort;

#[derive(Debug, Default)]
pub struct RecordedLines {
    lines: Mutex<Vec<(Target, LineColor)>>,
}

impl RecordedLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines drawn so far, oldest first.
    pub fn lines(&self) -> Vec<(Target, LineColor)> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TargetLinePort for RecordedLines {
    fn draw_target_line(&self, target: &Target, color: LineColor) {
        tracing::trace!(target = %target, color = %color, "Target line");
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((target.clone(), color));
    }
}
