use wellcheck_types::{Goto, Item, Page, SurveyDefinition};

/// The survey endpoint's response body for the daily well check.
pub const DAILY_WELL_CHECK_RESPONSE: &str = include_str!("../surveys/daily_well_check.json");

/// Parse the bundled JSON response.
pub fn daily_well_check_from_json() -> anyhow::Result<SurveyDefinition> {
    Ok(SurveyDefinition::from_response_json(
        DAILY_WELL_CHECK_RESPONSE,
    )?)
}

/// The daily well check, built in code. Same survey as the bundled JSON.
///
/// Steps:
/// 0. exposure - a "no" on close contact skips the household follow-up
/// 1. symptoms - four plain questions, advances once all are answered
/// 2. testing - "no" on either question skips straight to travel
/// 3. isolation - only after a positive test
/// 4. travel
pub fn daily_well_check() -> SurveyDefinition {
    SurveyDefinition::new()
        .with_page(
            "exposure",
            Page::new(0)
                .with_text("Exposure")
                .with_icon("people")
                .with_item(
                    "close_contact",
                    Item::new(
                        "In the last 14 days, have you been in close contact with someone who tested positive for COVID-19?",
                    )
                    .with_go_no(Goto::Next),
                )
                .with_item(
                    "household",
                    Item::new("Is that person a member of your household?")
                        .with_when_yes("close_contact"),
                ),
        )
        .with_page(
            "symptoms",
            Page::new(1)
                .with_text("In the last 24 hours, have you had any of the following?")
                .with_icon("thermometer")
                .with_item("fever", Item::new("Fever of 100.4°F or higher"))
                .with_item("cough", Item::new("New or worsening cough"))
                .with_item(
                    "short_breath",
                    Item::new("Shortness of breath or difficulty breathing"),
                )
                .with_item("taste_smell", Item::new("New loss of taste or smell")),
        )
        .with_page(
            "testing",
            Page::new(2)
                .with_text("Testing")
                .with_icon("test-tube")
                .with_item(
                    "tested",
                    Item::new("Have you been tested for COVID-19 in the last 14 days?")
                        .with_go_no(Goto::Step(4)),
                )
                .with_item(
                    "positive",
                    Item::new("Was the result positive?")
                        .with_when_yes("tested")
                        .with_go_no(Goto::Step(4)),
                ),
        )
        .with_page(
            "isolation",
            Page::new(3)
                .with_text("Isolation")
                .with_when_yes("testing", "positive")
                .with_item(
                    "isolation_complete",
                    Item::new(
                        "Have you completed the isolation period your health provider recommended?",
                    ),
                ),
        )
        .with_page(
            "travel",
            Page::new(4)
                .with_text("Travel")
                .with_icon("airplane")
                .with_item(
                    "international",
                    Item::new("Have you travelled internationally in the last 14 days?"),
                ),
        )
}
