use wellcheck_types::AnswerSet;

/// Everything that changes while a user works through the survey.
///
/// Values are never mutated by the engine; each operation returns a new state
/// and the host decides which one to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveySessionState {
    pub(crate) step: usize,
    pub(crate) answers: AnswerSet,
    pub(crate) restart_count: u32,
}

impl SurveySessionState {
    pub(crate) fn new(answers: AnswerSet) -> Self {
        Self {
            step: 0,
            answers,
            restart_count: 0,
        }
    }

    /// The current step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Answers given so far.
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// How many times the survey was restarted.
    pub fn restart_count(&self) -> u32 {
        self.restart_count
    }
}
