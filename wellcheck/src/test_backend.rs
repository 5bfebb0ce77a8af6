//! In-memory collaborators for running surveys without a server.
//!
//! `StaticSource` hands out a fixed definition (or JSON body), and
//! `RecordingSink` keeps every submission it receives. Both can be told to fail.
//!
//! # Example
//!
//! ```rust,ignore
//! use wellcheck::{RecordingSink, StaticSource, SurveySession};
//!
//! let source = StaticSource::from_json(r#"{"p0": {"step": 0, "items": {"a": {"text": "A"}}}}"#);
//! let mut session = SurveySession::start(&source).unwrap();
//! session.answer("p0", "a", true).unwrap();
//!
//! let sink = RecordingSink::new();
//! session.submit(&sink).unwrap();
//! assert_eq!(sink.submissions().len(), 1);
//! ```

use std::cell::{Cell, RefCell};

use crate::{Submission, SubmissionSink, SurveyDataSource, SurveyDefinition};

/// Error type for the in-memory collaborators.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Service unavailable")]
    Unavailable,
}

#[derive(Debug, Clone)]
enum Payload {
    Definition(SurveyDefinition),
    Json(String),
    ResponseJson(String),
    Unavailable,
}

/// A survey source that returns a pre-configured definition.
#[derive(Debug, Clone)]
pub struct StaticSource {
    payload: Payload,
}

impl StaticSource {
    /// Serve an already built definition.
    pub fn new(definition: SurveyDefinition) -> Self {
        Self {
            payload: Payload::Definition(definition),
        }
    }

    /// Serve a bare definition JSON body, parsed on every fetch.
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            payload: Payload::Json(json.into()),
        }
    }

    /// Serve a survey endpoint response body, `{"survey": {...}}`, parsed on every fetch.
    pub fn from_response_json(json: impl Into<String>) -> Self {
        Self {
            payload: Payload::ResponseJson(json.into()),
        }
    }

    /// A source whose every fetch fails.
    pub fn unavailable() -> Self {
        Self {
            payload: Payload::Unavailable,
        }
    }
}

impl SurveyDataSource for StaticSource {
    // Payload errors stay `DefinitionError` underneath so sessions can tell them apart.
    type Error = anyhow::Error;

    fn fetch(&self) -> Result<SurveyDefinition, Self::Error> {
        match &self.payload {
            Payload::Definition(definition) => Ok(definition.clone()),
            Payload::Json(json) => Ok(SurveyDefinition::from_json(json)?),
            Payload::ResponseJson(json) => Ok(SurveyDefinition::from_response_json(json)?),
            Payload::Unavailable => Err(TestBackendError::Unavailable.into()),
        }
    }
}

/// A submission sink that records what it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    submissions: RefCell<Vec<Submission>>,
    failures_left: Cell<u32>,
}

impl RecordingSink {
    /// Create a sink that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that rejects the first `count` submissions.
    pub fn failing(count: u32) -> Self {
        Self {
            submissions: RefCell::new(Vec::new()),
            failures_left: Cell::new(count),
        }
    }

    /// Get every accepted submission, oldest first.
    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.borrow().clone()
    }
}

impl SubmissionSink for RecordingSink {
    type Error = TestBackendError;

    fn submit(&self, submission: &Submission) -> Result<(), Self::Error> {
        let failures_left = self.failures_left.get();
        if failures_left > 0 {
            self.failures_left.set(failures_left - 1);
            return Err(TestBackendError::Unavailable);
        }
        self.submissions.borrow_mut().push(submission.clone());
        Ok(())
    }
}
