/// Visibility predicate of a page or an item.
///
/// `R` is the kind of reference the predicate points at: an [`ItemRef`](crate::ItemRef)
/// for pages (answers on any page), or a sibling item key for items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Visibility<R> {
    /// Always visible.
    #[default]
    Always,

    /// Visible only when the referenced answer is exactly `yes`.
    WhenYes(R),

    /// Visible only when the referenced answer is exactly `no`.
    WhenNo(R),
}

impl<R> Visibility<R> {
    /// Check if this is the unconditional variant.
    pub fn is_always(&self) -> bool {
        matches!(self, Self::Always)
    }

    /// Get the referenced answer, if any.
    pub fn reference(&self) -> Option<&R> {
        match self {
            Self::Always => None,
            Self::WhenYes(r) | Self::WhenNo(r) => Some(r),
        }
    }

    /// Evaluate the predicate. `lookup` returns the current answer for a reference
    /// (`None` while unanswered).
    pub fn holds(&self, lookup: impl FnOnce(&R) -> Option<bool>) -> bool {
        match self {
            Self::Always => true,
            Self::WhenYes(r) => lookup(r) == Some(true),
            Self::WhenNo(r) => lookup(r) == Some(false),
        }
    }

    pub(crate) fn from_parts(when_yes: Option<R>, when_no: Option<R>) -> Option<Self> {
        match (when_yes, when_no) {
            (None, None) => Some(Self::Always),
            (Some(r), None) => Some(Self::WhenYes(r)),
            (None, Some(r)) => Some(Self::WhenNo(r)),
            (Some(_), Some(_)) => None,
        }
    }

    pub(crate) fn into_parts(self) -> (Option<R>, Option<R>) {
        match self {
            Self::Always => (None, None),
            Self::WhenYes(r) => (Some(r), None),
            Self::WhenNo(r) => (None, Some(r)),
        }
    }
}
