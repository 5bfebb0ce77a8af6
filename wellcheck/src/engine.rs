//! The survey step engine: which page is showing and where an answer leads.

use tracing::{debug, info};
use wellcheck_types::{
    AnswerSet, DefinitionError, EngineError, Page, Submission, SurveyDefinition,
};

use crate::SurveySessionState;

/// Drives a loaded survey definition.
///
/// The engine holds only the (validated) definition. All session data lives in
/// [`SurveySessionState`], which is passed in and returned by every operation.
#[derive(Debug, Clone)]
pub struct SurveyStepEngine {
    definition: SurveyDefinition,
    terminal_step: usize,
}

impl SurveyStepEngine {
    /// Validate a definition and build an engine for it.
    pub fn new(definition: SurveyDefinition) -> Result<Self, DefinitionError> {
        definition.validate()?;
        let terminal_step = definition.terminal_step();
        info!(
            pages = definition.len(),
            terminal_step, "Survey definition loaded"
        );
        Ok(Self {
            definition,
            terminal_step,
        })
    }

    /// Build an engine and its initial state in one go.
    pub fn load_definition(
        definition: SurveyDefinition,
    ) -> Result<(Self, SurveySessionState), DefinitionError> {
        let engine = Self::new(definition)?;
        let state = engine.load();
        Ok((engine, state))
    }

    /// A fresh state: every answer unanswered, step 0, no restarts.
    pub fn load(&self) -> SurveySessionState {
        SurveySessionState::new(AnswerSet::seeded(&self.definition))
    }

    /// Get the loaded definition.
    pub fn definition(&self) -> &SurveyDefinition {
        &self.definition
    }

    /// The step at which the confirmation page replaces the data pages.
    pub fn terminal_step(&self) -> usize {
        self.terminal_step
    }

    /// Number of positions in the step indicator, confirmation included.
    pub fn step_count(&self) -> usize {
        self.terminal_step + 1
    }

    /// Record an answer and move the step pointer.
    ///
    /// An item's goto override for the given value always wins. Without one, the
    /// step advances by one once every item on the answered page has a value.
    pub fn answer(
        &self,
        state: &SurveySessionState,
        page_key: &str,
        item_key: &str,
        value: bool,
    ) -> Result<SurveySessionState, EngineError> {
        let item = self
            .definition
            .item(page_key, item_key)
            .ok_or_else(|| EngineError::unknown_item(page_key, item_key))?;

        let mut next = state.clone();
        next.answers.record(page_key, item_key, value)?;

        if let Some(goto) = item.goto_for(value) {
            next.step = goto.target(state.step);
            debug!(
                page = page_key,
                item = item_key,
                value,
                %goto,
                from = state.step,
                to = next.step,
                "Following goto override"
            );
            return Ok(next);
        }

        if next.answers.is_page_filled(page_key) {
            next.step = state.step + 1;
            debug!(
                page = page_key,
                item = item_key,
                value,
                to = next.step,
                "Page filled, advancing"
            );
        } else {
            debug!(page = page_key, item = item_key, value, "Answer recorded");
        }

        Ok(next)
    }

    /// Check if a page is shown in the given state.
    ///
    /// Unknown pages are never visible.
    pub fn is_page_visible(&self, state: &SurveySessionState, page_key: &str) -> bool {
        self.definition
            .page(page_key)
            .is_some_and(|page| self.page_shown(state, page))
    }

    /// Check if an item is shown, ignoring whether its page is.
    ///
    /// Unknown items are never visible.
    pub fn is_item_visible(&self, state: &SurveySessionState, page_key: &str, item_key: &str) -> bool {
        self.definition.item(page_key, item_key).is_some_and(|item| {
            item.visibility()
                .holds(|sibling| state.answers.get(page_key, sibling))
        })
    }

    /// Keys of every page shown in the given state, in declaration order.
    pub fn visible_pages<'a>(&'a self, state: &'a SurveySessionState) -> impl Iterator<Item = &'a str> {
        self.definition
            .pages()
            .iter()
            .filter(|(_, page)| self.page_shown(state, page))
            .map(|(key, _)| key.as_str())
    }

    /// Keys of every item shown on a page, in display order.
    pub fn visible_items<'a>(
        &'a self,
        state: &'a SurveySessionState,
        page_key: &'a str,
    ) -> impl Iterator<Item = &'a str> {
        self.definition
            .page(page_key)
            .into_iter()
            .flat_map(|page| page.item_keys())
            .filter(move |item_key| self.is_item_visible(state, page_key, item_key))
    }

    /// Clear every answer and go back to step 0, counting the restart.
    pub fn restart(&self, state: &SurveySessionState) -> SurveySessionState {
        let mut next = state.clone();
        next.answers.clear();
        next.step = 0;
        next.restart_count = state.restart_count + 1;
        info!(restarts = next.restart_count, "Survey restarted");
        next
    }

    /// Check if the survey reached the confirmation step.
    pub fn is_complete(&self, state: &SurveySessionState) -> bool {
        state.step >= self.terminal_step
    }

    /// Build the payload for the submission sink.
    pub fn submission(&self, state: &SurveySessionState) -> Result<Submission, EngineError> {
        if !self.is_complete(state) {
            return Err(EngineError::Incomplete {
                step: state.step,
                terminal: self.terminal_step,
            });
        }
        Ok(Submission::new(state.answers.clone(), state.restart_count))
    }

    fn page_shown(&self, state: &SurveySessionState, page: &Page) -> bool {
        state.step == page.step() && page.visibility().holds(|r| state.answers.get_ref(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellcheck_types::{Goto, Item};

    fn two_pages() -> SurveyDefinition {
        SurveyDefinition::new()
            .with_page(
                "p0",
                Page::new(0)
                    .with_item("a", Item::new("A"))
                    .with_item("b", Item::new("B")),
            )
            .with_page("p1", Page::new(1).with_item("c", Item::new("C")))
    }

    #[test]
    fn load_starts_clean() {
        let (engine, state) = SurveyStepEngine::load_definition(two_pages()).unwrap();
        assert_eq!(state.step(), 0);
        assert_eq!(state.restart_count(), 0);
        assert_eq!(state.answers().len(), 3);
        assert_eq!(state.answers().answered_count(), 0);
        assert_eq!(engine.terminal_step(), 2);
        assert_eq!(engine.step_count(), 3);
    }

    #[test]
    fn auto_advance_after_page_filled() {
        let (engine, state) = SurveyStepEngine::load_definition(two_pages()).unwrap();

        let state = engine.answer(&state, "p0", "a", true).unwrap();
        assert_eq!(state.step(), 0);
        assert!(!engine.is_page_visible(&state, "p1"));

        let state = engine.answer(&state, "p0", "b", false).unwrap();
        assert_eq!(state.step(), 1);
        assert!(engine.is_page_visible(&state, "p1"));
        assert!(!engine.is_page_visible(&state, "p0"));
    }

    #[test]
    fn goto_next_ignores_unanswered_siblings() {
        let definition = SurveyDefinition::new().with_page(
            "p0",
            Page::new(0)
                .with_item("a", Item::new("A").with_go_no(Goto::Next))
                .with_item("b", Item::new("B")),
        );
        let (engine, state) = SurveyStepEngine::load_definition(definition).unwrap();

        let state = engine.answer(&state, "p0", "a", false).unwrap();
        assert_eq!(state.step(), 1);
        assert_eq!(state.answers().get("p0", "b"), None);
    }

    #[test]
    fn goto_step_jumps_exactly() {
        let definition = two_pages()
            .with_page("p0", Page::new(0).with_item("a", Item::new("A").with_go_yes(Goto::Step(3))))
            .with_page("p3", Page::new(3).with_item("d", Item::new("D")));
        let (engine, state) = SurveyStepEngine::load_definition(definition).unwrap();

        let state = engine.answer(&state, "p0", "a", true).unwrap();
        assert_eq!(state.step(), 3);
        assert!(engine.is_page_visible(&state, "p3"));
    }

    #[test]
    fn goto_wins_over_auto_advance() {
        let definition = SurveyDefinition::new()
            .with_page(
                "p0",
                Page::new(0)
                    .with_item("a", Item::new("A"))
                    .with_item("b", Item::new("B").with_go_yes(Goto::Step(5))),
            )
            .with_page("p5", Page::new(5));
        let (engine, state) = SurveyStepEngine::load_definition(definition).unwrap();

        let state = engine.answer(&state, "p0", "a", false).unwrap();
        let state = engine.answer(&state, "p0", "b", true).unwrap();
        assert_eq!(state.step(), 5);
    }

    #[test]
    fn goto_only_for_matching_value() {
        let definition = SurveyDefinition::new().with_page(
            "p0",
            Page::new(0)
                .with_item("a", Item::new("A").with_go_yes(Goto::Step(4)))
                .with_item("b", Item::new("B")),
        );
        let (engine, state) = SurveyStepEngine::load_definition(definition).unwrap();

        let state = engine.answer(&state, "p0", "a", false).unwrap();
        assert_eq!(state.step(), 0);
    }

    #[test]
    fn unknown_item_is_rejected() {
        let (engine, state) = SurveyStepEngine::load_definition(two_pages()).unwrap();
        let err = engine.answer(&state, "p0", "zzz", true).unwrap_err();
        assert!(matches!(err, EngineError::UnknownItem { .. }));
        let err = engine.answer(&state, "nope", "a", true).unwrap_err();
        assert!(matches!(err, EngineError::UnknownItem { page, .. } if page == "nope"));
    }

    #[test]
    fn answer_leaves_input_state_untouched() {
        let (engine, state) = SurveyStepEngine::load_definition(two_pages()).unwrap();
        let before = state.clone();
        let _ = engine.answer(&state, "p0", "a", true).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn page_predicates() {
        let definition = two_pages()
            .with_page(
                "yes_branch",
                Page::new(1)
                    .with_when_yes("p0", "a")
                    .with_item("y", Item::new("Y")),
            )
            .with_page(
                "no_branch",
                Page::new(1)
                    .with_when_no("p0", "a")
                    .with_item("n", Item::new("N")),
            );
        let (engine, state) = SurveyStepEngine::load_definition(definition).unwrap();

        let state = engine.answer(&state, "p0", "a", false).unwrap();
        let state = engine.answer(&state, "p0", "b", true).unwrap();
        assert_eq!(state.step(), 1);
        assert!(!engine.is_page_visible(&state, "yes_branch"));
        assert!(engine.is_page_visible(&state, "no_branch"));
        assert!(engine.is_page_visible(&state, "p1"));
        assert_eq!(
            engine.visible_pages(&state).collect::<Vec<_>>(),
            vec!["p1", "no_branch"]
        );
    }

    #[test]
    fn item_predicates() {
        let definition = SurveyDefinition::new().with_page(
            "p0",
            Page::new(0)
                .with_item("tested", Item::new("Tested?"))
                .with_item("positive", Item::new("Positive?").with_when_yes("tested"))
                .with_item("why_not", Item::new("Scheduled?").with_when_no("tested")),
        );
        let (engine, state) = SurveyStepEngine::load_definition(definition).unwrap();

        assert_eq!(engine.visible_items(&state, "p0").collect::<Vec<_>>(), vec!["tested"]);

        let state = engine.answer(&state, "p0", "tested", true).unwrap();
        assert!(engine.is_item_visible(&state, "p0", "positive"));
        assert!(!engine.is_item_visible(&state, "p0", "why_not"));
        assert!(!engine.is_item_visible(&state, "p0", "unknown"));
        assert_eq!(
            engine.visible_items(&state, "p0").collect::<Vec<_>>(),
            vec!["tested", "positive"]
        );
    }

    #[test]
    fn visibility_is_idempotent() {
        let (engine, state) = SurveyStepEngine::load_definition(two_pages()).unwrap();
        let first = engine.is_page_visible(&state, "p0");
        assert_eq!(first, engine.is_page_visible(&state, "p0"));
        assert_eq!(
            engine.is_item_visible(&state, "p0", "a"),
            engine.is_item_visible(&state, "p0", "a")
        );
    }

    #[test]
    fn step_without_page_shows_nothing() {
        let definition = SurveyDefinition::new()
            .with_page("p0", Page::new(0).with_item("a", Item::new("A").with_go_yes(Goto::Step(7))))
            .with_page("p9", Page::new(9));
        let (engine, state) = SurveyStepEngine::load_definition(definition).unwrap();

        let state = engine.answer(&state, "p0", "a", true).unwrap();
        assert_eq!(state.step(), 7);
        assert_eq!(engine.visible_pages(&state).count(), 0);
        assert!(!engine.is_complete(&state));
    }

    #[test]
    fn restart_resets_and_counts() {
        let (engine, state) = SurveyStepEngine::load_definition(two_pages()).unwrap();
        let state = engine.answer(&state, "p0", "a", true).unwrap();
        let state = engine.answer(&state, "p0", "b", true).unwrap();

        let state = engine.restart(&state);
        assert_eq!(state.step(), 0);
        assert_eq!(state.restart_count(), 1);
        assert_eq!(state.answers().answered_count(), 0);
        assert_eq!(state.answers().len(), 3);

        let state = engine.restart(&engine.restart(&state));
        assert_eq!(state.restart_count(), 3);
    }

    #[test]
    fn submission_requires_completion() {
        let (engine, state) = SurveyStepEngine::load_definition(two_pages()).unwrap();
        assert!(matches!(
            engine.submission(&state),
            Err(EngineError::Incomplete { step: 0, terminal: 2 })
        ));

        let state = engine.answer(&state, "p0", "a", true).unwrap();
        let state = engine.answer(&state, "p0", "b", true).unwrap();
        let state = engine.restart(&state);
        let state = engine.answer(&state, "p0", "a", false).unwrap();
        let state = engine.answer(&state, "p0", "b", false).unwrap();
        let state = engine.answer(&state, "p1", "c", true).unwrap();
        assert!(engine.is_complete(&state));

        let submission = engine.submission(&state).unwrap();
        assert_eq!(submission.restarts, 1);
        assert_eq!(submission.answers.get("p1", "c"), Some(true));
        assert_eq!(submission.answers.get("p0", "a"), Some(false));
    }

    #[test]
    fn invalid_definition_fails_fast() {
        assert!(matches!(
            SurveyStepEngine::new(SurveyDefinition::new()),
            Err(DefinitionError::Empty)
        ));
    }
}
