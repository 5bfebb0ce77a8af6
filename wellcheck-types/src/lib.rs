//! Core types for the wellcheck crate.
//!
//! This crate provides the foundational types for the daily well check:
//! - `SurveyDefinition`, `Page` and `Item` - The survey structure
//! - `Visibility` and `Goto` - Per-page/per-item branching rules
//! - `AnswerSet` and `ItemRef` - Collected yes/no answers
//! - `Submission` and `SubmissionRecord` - What goes to and comes back from the server
//! - `SurveyDataSource` and `SubmissionSink` traits - For plugging in the remote API

mod item_ref;
pub use item_ref::ItemRef;

mod goto;
pub use goto::Goto;

mod visibility;
pub use visibility::Visibility;

mod page;
pub use page::{Item, Page};

mod survey_definition;
pub use survey_definition::SurveyDefinition;

mod answers;
pub use answers::AnswerSet;

mod submission;
pub use submission::{ResetRequest, Submission, SubmissionRecord, SubmissionResult};

mod error;
pub use error::{DefinitionError, EngineError};

mod traits;
pub use traits::{SubmissionSink, SurveyDataSource};
