use crate::{Submission, SurveyDefinition};

/// Trait for whatever delivers the survey definition (usually the remote API).
///
/// Implementations perform the fetch and parsing; the engine only ever sees an
/// already-resolved `SurveyDefinition`.
pub trait SurveyDataSource {
    /// The error type for this source.
    type Error: Into<anyhow::Error>;

    /// Fetch the current survey definition.
    fn fetch(&self) -> Result<SurveyDefinition, Self::Error>;
}

/// Trait for whatever persists a completed survey.
///
/// Retry policy belongs to the caller: a failed `submit` leaves the session intact.
pub trait SubmissionSink {
    /// The error type for this sink.
    type Error: Into<anyhow::Error>;

    /// Persist a completed survey.
    fn submit(&self, submission: &Submission) -> Result<(), Self::Error>;
}
