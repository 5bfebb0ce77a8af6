/// Error type for malformed survey definitions, reported at load time.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// The survey has no pages at all.
    #[error("Survey definition has no pages")]
    Empty,

    /// A page predicate points at a page that does not exist.
    #[error("Unknown page '{page}' referenced by '{referenced_by}'")]
    UnknownPage { page: String, referenced_by: String },

    /// A predicate points at an item that does not exist on its page.
    #[error("Unknown item '{page}.{item}' referenced by '{referenced_by}'")]
    UnknownItem {
        page: String,
        item: String,
        referenced_by: String,
    },

    /// Both `when_yes` and `when_no` were declared on the same page or item.
    #[error("'{at}' declares both when_yes and when_no")]
    ConflictingPredicates { at: String },

    /// A page declares a negative step.
    #[error("Page '{page}' has negative step {step}")]
    NegativeStep { page: String, step: i64 },

    /// An item goto points at a negative step.
    #[error("Goto on '{at}' points at negative step {step}")]
    NegativeGoto { at: String, step: i64 },

    /// An item goto is a string other than `next`.
    #[error("Goto on '{at}' has unknown keyword '{keyword}'")]
    UnknownGotoKeyword { at: String, keyword: String },

    /// A predicate or goto key is present but set to `null`.
    #[error("'{at}' sets {field} to null")]
    NullField { at: String, field: &'static str },

    /// The JSON payload could not be parsed at all.
    #[error("Invalid survey JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error type for step engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The answered item is not part of the loaded survey.
    #[error("Unknown item '{page}.{item}'")]
    UnknownItem { page: String, item: String },

    /// A submission was requested before the survey reached its terminal step.
    #[error("Survey is not complete (step {step} of {terminal})")]
    Incomplete { step: usize, terminal: usize },
}

impl EngineError {
    pub fn unknown_item(page: impl Into<String>, item: impl Into<String>) -> Self {
        Self::UnknownItem {
            page: page.into(),
            item: item.into(),
        }
    }
}
