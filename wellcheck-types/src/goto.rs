use std::fmt;

/// A goto override attached to an item answer.
///
/// When an item with a goto is answered with the matching value, the step
/// pointer is redirected instead of waiting for the page to fill up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goto {
    /// Jump to an absolute step.
    Step(usize),

    /// Advance to the step after the current one.
    Next,
}

impl Goto {
    /// The keyword used for `Next` in survey JSON.
    pub const NEXT_KEYWORD: &'static str = "next";

    /// Compute the step this goto leads to from `current`.
    pub fn target(&self, current: usize) -> usize {
        match self {
            Self::Step(step) => *step,
            Self::Next => current + 1,
        }
    }

    /// Check if this is the `Next` sentinel.
    pub fn is_next(&self) -> bool {
        matches!(self, Self::Next)
    }
}

impl fmt::Display for Goto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(step) => write!(f, "step {step}"),
            Self::Next => f.write_str(Self::NEXT_KEYWORD),
        }
    }
}

impl From<usize> for Goto {
    fn from(step: usize) -> Self {
        Self::Step(step)
    }
}
