use tracing::{info, warn};
use wellcheck_types::{Submission, SubmissionSink, SurveyDataSource, SurveyDefinition};

use crate::{SurveySessionState, SurveyStepEngine, WellCheckError};

/// One user's pass through the survey, as owned by the hosting screen.
///
/// Holds the engine and the single current state; every call swaps in the
/// state the engine returns.
#[derive(Debug, Clone)]
pub struct SurveySession {
    engine: SurveyStepEngine,
    state: SurveySessionState,
}

impl SurveySession {
    /// Fetch the definition from `source` and start a fresh session.
    pub fn start<S>(source: &S) -> Result<Self, WellCheckError>
    where
        S: SurveyDataSource + ?Sized,
    {
        let definition = source.fetch().map_err(WellCheckError::source_error)?;
        Self::from_definition(definition)
    }

    /// Start a fresh session on an already fetched definition.
    pub fn from_definition(definition: SurveyDefinition) -> Result<Self, WellCheckError> {
        let (engine, state) = SurveyStepEngine::load_definition(definition)?;
        Ok(Self { engine, state })
    }

    /// Get the engine.
    pub fn engine(&self) -> &SurveyStepEngine {
        &self.engine
    }

    /// Get the current state.
    pub fn state(&self) -> &SurveySessionState {
        &self.state
    }

    /// Get the current step.
    pub fn step(&self) -> usize {
        self.state.step()
    }

    /// Answer an item. On error the state is unchanged.
    pub fn answer(&mut self, page: &str, item: &str, value: bool) -> Result<(), WellCheckError> {
        self.state = self.engine.answer(&self.state, page, item, value)?;
        Ok(())
    }

    /// Clear all answers and return to the first step.
    pub fn restart(&mut self) {
        self.state = self.engine.restart(&self.state);
    }

    /// Check if the confirmation step was reached.
    pub fn is_complete(&self) -> bool {
        self.engine.is_complete(&self.state)
    }

    /// Hand the completed survey to `sink`.
    ///
    /// A sink failure leaves the session as it was, so the caller may retry.
    pub fn submit<K>(&self, sink: &K) -> Result<Submission, WellCheckError>
    where
        K: SubmissionSink + ?Sized,
    {
        let submission = self.engine.submission(&self.state)?;
        if let Err(err) = sink.submit(&submission) {
            let err = WellCheckError::sink_error(err);
            warn!(error = %err, "Survey submission failed");
            return Err(err);
        }
        info!(
            answered = submission.answers.answered_count(),
            restarts = submission.restarts,
            "Survey submitted"
        );
        Ok(submission)
    }
}
