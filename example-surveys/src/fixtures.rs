//! Small surveys exercising one branching rule each.

use wellcheck_types::{Goto, Item, Page, SurveyDefinition};

/// `p0` (step 0) with plain items `a` and `b`, then an unconditional `p1` (step 1).
pub fn two_pages() -> SurveyDefinition {
    SurveyDefinition::new()
        .with_page(
            "p0",
            Page::new(0)
                .with_item("a", Item::new("A?"))
                .with_item("b", Item::new("B?")),
        )
        .with_page("p1", Page::new(1).with_item("c", Item::new("C?")))
}

/// Like [`two_pages`], but answering `p0.a` with no moves on right away.
pub fn goto_next() -> SurveyDefinition {
    SurveyDefinition::new()
        .with_page(
            "p0",
            Page::new(0)
                .with_item("a", Item::new("A?").with_go_no(Goto::Next))
                .with_item("b", Item::new("B?")),
        )
        .with_page("p1", Page::new(1).with_item("c", Item::new("C?")))
}

/// Answering `p0.a` with yes jumps to step 3, skipping `p1` and `p2`.
pub fn goto_step() -> SurveyDefinition {
    SurveyDefinition::new()
        .with_page(
            "p0",
            Page::new(0)
                .with_item("a", Item::new("A?").with_go_yes(Goto::Step(3)))
                .with_item("b", Item::new("B?")),
        )
        .with_page("p1", Page::new(1).with_item("c", Item::new("C?")))
        .with_page("p2", Page::new(2).with_item("d", Item::new("D?")))
        .with_page("p3", Page::new(3).with_item("e", Item::new("E?")))
}

/// Two pages share step 1; which one shows depends on the answer to `p0.a`.
pub fn page_branches() -> SurveyDefinition {
    SurveyDefinition::new()
        .with_page("p0", Page::new(0).with_item("a", Item::new("A?")))
        .with_page(
            "if_yes",
            Page::new(1)
                .with_when_yes("p0", "a")
                .with_item("y", Item::new("Y?")),
        )
        .with_page(
            "if_no",
            Page::new(1)
                .with_when_no("p0", "a")
                .with_item("n", Item::new("N?")),
        )
}
