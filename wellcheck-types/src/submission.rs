use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AnswerSet;

/// Payload handed to the submission endpoint once the survey is confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Every answer, including items that were skipped (`null`).
    pub answers: AnswerSet,

    /// How many times the user restarted the survey before confirming.
    pub restarts: u32,
}

impl Submission {
    pub fn new(answers: AnswerSet, restarts: u32) -> Self {
        Self { answers, restarts }
    }
}

/// Verdict the server assigned to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionResult {
    /// Cleared to go to work.
    Clear,

    /// Must stay home.
    NotClear,
}

/// A reset the user asked for after a `not_clear` verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetRequest {
    pub created_at: DateTime<Utc>,
}

/// The latest submission as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub result: SubmissionResult,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reset_requests: Vec<ResetRequest>,
}

#[derive(Deserialize)]
struct SubmissionEnvelope {
    submission: Option<SubmissionRecord>,
}

impl SubmissionRecord {
    /// Parse the status endpoint's response body, `{"submission": {...} | null}`.
    pub fn latest_from_response_json(json: &str) -> Result<Option<Self>, serde_json::Error> {
        let envelope: SubmissionEnvelope = serde_json::from_str(json)?;
        Ok(envelope.submission)
    }

    /// Get the most recent reset request, if any.
    pub fn latest_reset_request(&self) -> Option<&ResetRequest> {
        self.reset_requests.first()
    }
}
