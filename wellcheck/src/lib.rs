//! # wellcheck
//!
//! The daily well check: a yes/no health survey whose pages and questions branch
//! on earlier answers, the verdict shown once the server has scored a submission,
//! and the validation rules of the account forms.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wellcheck::{SurveySession, StaticSource, RecordingSink};
//!
//! let mut session = SurveySession::start(&StaticSource::new(definition))?;
//! session.answer("exposure", "close_contact", false)?;
//! // ...
//! if session.is_complete() {
//!     session.submit(&sink)?;
//! }
//! ```
//!
//! ## Branching
//!
//! - A page is shown when the current step equals its `step` and its
//!   `when_yes` / `when_no` predicate (if any) holds.
//! - An item is shown when its sibling predicate (if any) holds.
//! - Answering an item with a `go_yes` / `go_no` override jumps straight to
//!   that step (or `next`). Otherwise the step advances once the page is filled.
//!
//! ## Collaborators
//!
//! The remote API plugs in through `SurveyDataSource` and `SubmissionSink`.
//! `StaticSource` and `RecordingSink` are in-memory versions for tests.

// Re-export all types from wellcheck-types
pub use wellcheck_types::*;

mod state;
pub use state::SurveySessionState;

mod engine;
pub use engine::SurveyStepEngine;

mod session;
pub use session::SurveySession;

mod error;
pub use error::WellCheckError;

mod status;
pub use status::{StatusAction, WellCheckStatus};

pub mod forms;

// In-memory collaborators for testing without a server
mod test_backend;
pub use test_backend::{RecordingSink, StaticSource, TestBackendError};
