use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{DefinitionError, Goto, Item, ItemRef, Page, Visibility};

/// The top-level structure containing every page of a survey.
///
/// Pages are kept in the order they were declared; which one is shown is decided
/// by its `step` and visibility predicate, not by its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSurvey", into = "RawSurvey")]
pub struct SurveyDefinition {
    pages: IndexMap<String, Page>,
}

impl SurveyDefinition {
    /// Create an empty survey definition.
    pub fn new() -> Self {
        Self {
            pages: IndexMap::new(),
        }
    }

    /// Append a page.
    pub fn with_page(mut self, key: impl Into<String>, page: Page) -> Self {
        self.pages.insert(key.into(), page);
        self
    }

    /// Parse and validate a bare survey definition.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let raw: RawSurvey = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Parse and validate the survey endpoint's response body, `{"survey": {...}}`.
    pub fn from_response_json(json: &str) -> Result<Self, DefinitionError> {
        let envelope: SurveyEnvelope = serde_json::from_str(json)?;
        Self::try_from(envelope.survey)
    }

    /// Serialize back into the survey JSON shape.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Get all pages in declaration order.
    pub fn pages(&self) -> &IndexMap<String, Page> {
        &self.pages
    }

    /// Get a page by key.
    pub fn page(&self, key: &str) -> Option<&Page> {
        self.pages.get(key)
    }

    /// Get an item by page and item key.
    pub fn item(&self, page: &str, item: &str) -> Option<&Item> {
        self.page(page).and_then(|p| p.item(item))
    }

    /// Iterate over page keys in declaration order.
    pub fn page_keys(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Check if the survey has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get the number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// One past the highest page step. Reaching it means every data page is behind us.
    pub fn terminal_step(&self) -> usize {
        self.pages
            .values()
            .map(Page::step)
            .max()
            .map_or(0, |step| step + 1)
    }

    /// Check that every predicate points at a page and item that exist.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.pages.is_empty() {
            return Err(DefinitionError::Empty);
        }

        for (page_key, page) in &self.pages {
            if let Some(target) = page.visibility().reference() {
                let Some(target_page) = self.pages.get(target.page()) else {
                    return Err(DefinitionError::UnknownPage {
                        page: target.page.clone(),
                        referenced_by: page_key.clone(),
                    });
                };
                if target_page.item(target.item()).is_none() {
                    return Err(DefinitionError::UnknownItem {
                        page: target.page.clone(),
                        item: target.item.clone(),
                        referenced_by: page_key.clone(),
                    });
                }
            }

            for (item_key, item) in page.items() {
                if let Some(sibling) = item.visibility().reference()
                    && page.item(sibling).is_none()
                {
                    return Err(DefinitionError::UnknownItem {
                        page: page_key.clone(),
                        item: sibling.clone(),
                        referenced_by: format!("{page_key}.{item_key}"),
                    });
                }
            }
        }

        Ok(())
    }
}

// === Wire format ===

#[derive(Deserialize)]
struct SurveyEnvelope {
    survey: RawSurvey,
}

#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct RawSurvey(IndexMap<String, RawPage>);

#[derive(Serialize, Deserialize)]
struct RawPage {
    step: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    when_yes: Option<Option<ItemRef>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    when_no: Option<Option<ItemRef>>,
    #[serde(default)]
    items: IndexMap<String, RawItem>,
}

#[derive(Serialize, Deserialize)]
struct RawItem {
    text: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    when_yes: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    when_no: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    go_yes: Option<Option<RawGoto>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    go_no: Option<Option<RawGoto>>,
}

/// Keeps an explicit `null` apart from a missing key: absent stays `None`
/// (via `default`), `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn non_null<T>(
    value: Option<Option<T>>,
    at: &str,
    field: &'static str,
) -> Result<Option<T>, DefinitionError> {
    match value {
        None => Ok(None),
        Some(None) => Err(DefinitionError::NullField {
            at: at.to_string(),
            field,
        }),
        Some(Some(value)) => Ok(Some(value)),
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawGoto {
    Step(i64),
    Keyword(String),
}

fn convert_goto(raw: Option<RawGoto>, at: &str) -> Result<Option<Goto>, DefinitionError> {
    match raw {
        None => Ok(None),
        Some(RawGoto::Step(step)) => usize::try_from(step)
            .map(|step| Some(Goto::Step(step)))
            .map_err(|_| DefinitionError::NegativeGoto {
                at: at.to_string(),
                step,
            }),
        Some(RawGoto::Keyword(keyword)) if keyword == Goto::NEXT_KEYWORD => Ok(Some(Goto::Next)),
        Some(RawGoto::Keyword(keyword)) => Err(DefinitionError::UnknownGotoKeyword {
            at: at.to_string(),
            keyword,
        }),
    }
}

impl TryFrom<RawSurvey> for SurveyDefinition {
    type Error = DefinitionError;

    fn try_from(raw: RawSurvey) -> Result<Self, Self::Error> {
        let mut pages = IndexMap::with_capacity(raw.0.len());

        for (page_key, raw_page) in raw.0 {
            let step = usize::try_from(raw_page.step).map_err(|_| DefinitionError::NegativeStep {
                page: page_key.clone(),
                step: raw_page.step,
            })?;
            let when_yes = non_null(raw_page.when_yes, &page_key, "when_yes")?;
            let when_no = non_null(raw_page.when_no, &page_key, "when_no")?;
            let visibility = Visibility::from_parts(when_yes, when_no).ok_or_else(|| {
                DefinitionError::ConflictingPredicates {
                    at: page_key.clone(),
                }
            })?;

            let mut items = IndexMap::with_capacity(raw_page.items.len());
            for (item_key, raw_item) in raw_page.items {
                let at = format!("{page_key}.{item_key}");
                let when_yes = non_null(raw_item.when_yes, &at, "when_yes")?;
                let when_no = non_null(raw_item.when_no, &at, "when_no")?;
                let visibility = Visibility::from_parts(when_yes, when_no)
                    .ok_or_else(|| DefinitionError::ConflictingPredicates { at: at.clone() })?;
                let go_yes = convert_goto(non_null(raw_item.go_yes, &at, "go_yes")?, &at)?;
                let go_no = convert_goto(non_null(raw_item.go_no, &at, "go_no")?, &at)?;
                items.insert(
                    item_key,
                    Item::from_parts(raw_item.text, visibility, go_yes, go_no),
                );
            }

            pages.insert(
                page_key,
                Page::from_parts(step, raw_page.text, raw_page.icon, visibility, items),
            );
        }

        let definition = Self { pages };
        definition.validate()?;
        Ok(definition)
    }
}

impl From<SurveyDefinition> for RawSurvey {
    fn from(definition: SurveyDefinition) -> Self {
        let to_raw_goto = |goto: Goto| match goto {
            // Steps beyond i64::MAX cannot come from JSON in the first place.
            Goto::Step(step) => RawGoto::Step(i64::try_from(step).unwrap_or(i64::MAX)),
            Goto::Next => RawGoto::Keyword(Goto::NEXT_KEYWORD.to_string()),
        };

        let pages = definition
            .pages
            .into_iter()
            .map(|(page_key, page)| {
                let items = page
                    .items()
                    .iter()
                    .map(|(item_key, item)| {
                        let (when_yes, when_no) = item.visibility().clone().into_parts();
                        let raw = RawItem {
                            text: item.text().to_string(),
                            when_yes: when_yes.map(Some),
                            when_no: when_no.map(Some),
                            go_yes: item.go_yes().map(|goto| Some(to_raw_goto(goto))),
                            go_no: item.go_no().map(|goto| Some(to_raw_goto(goto))),
                        };
                        (item_key.clone(), raw)
                    })
                    .collect();
                let (when_yes, when_no) = page.visibility().clone().into_parts();
                let raw = RawPage {
                    step: i64::try_from(page.step()).unwrap_or(i64::MAX),
                    text: page.text().map(str::to_string),
                    icon: page.icon().map(str::to_string),
                    when_yes: when_yes.map(Some),
                    when_no: when_no.map(Some),
                    items,
                };
                (page_key, raw)
            })
            .collect();

        RawSurvey(pages)
    }
}
