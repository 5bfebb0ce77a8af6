use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{EngineError, ItemRef, SurveyDefinition};

/// Answers collected for a survey: page key -> item key -> yes/no/unanswered.
///
/// An answer set is always seeded from a definition, so every item of every page
/// has an entry. Unanswered items hold `None` and serialize as JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    pages: IndexMap<String, IndexMap<String, Option<bool>>>,
}

impl AnswerSet {
    /// Create an answer set with every item of `definition` unanswered.
    pub fn seeded(definition: &SurveyDefinition) -> Self {
        let pages = definition
            .pages()
            .iter()
            .map(|(page_key, page)| {
                let items: IndexMap<String, Option<bool>> =
                    page.item_keys().map(|item| (item.to_string(), None)).collect();
                (page_key.clone(), items)
            })
            .collect();
        Self { pages }
    }

    /// Record an answer. Fails if the item was not seeded.
    pub fn record(&mut self, page: &str, item: &str, value: bool) -> Result<(), EngineError> {
        let slot = self
            .pages
            .get_mut(page)
            .and_then(|items| items.get_mut(item))
            .ok_or_else(|| EngineError::unknown_item(page, item))?;
        *slot = Some(value);
        Ok(())
    }

    /// Get the answer for an item. Unknown and unanswered items both yield `None`.
    pub fn get(&self, page: &str, item: &str) -> Option<bool> {
        self.pages.get(page)?.get(item).copied().flatten()
    }

    /// Get the answer for an item reference.
    pub fn get_ref(&self, item: &ItemRef) -> Option<bool> {
        self.get(item.page(), item.item())
    }

    /// Check if the item exists in this answer set.
    pub fn contains(&self, page: &str, item: &str) -> bool {
        self.pages
            .get(page)
            .is_some_and(|items| items.contains_key(item))
    }

    /// Get every answer of a page, in item order.
    pub fn page(&self, page: &str) -> Option<&IndexMap<String, Option<bool>>> {
        self.pages.get(page)
    }

    /// Check if every item of a page holds a yes or no.
    ///
    /// Unknown pages are never filled.
    pub fn is_page_filled(&self, page: &str) -> bool {
        self.pages
            .get(page)
            .is_some_and(|items| items.values().all(Option::is_some))
    }

    /// Reset every answer to unanswered, keeping all entries.
    pub fn clear(&mut self) {
        for items in self.pages.values_mut() {
            for value in items.values_mut() {
                *value = None;
            }
        }
    }

    /// Iterate over `(page, item, answer)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, Option<bool>)> {
        self.pages.iter().flat_map(|(page, items)| {
            items
                .iter()
                .map(move |(item, value)| (page.as_str(), item.as_str(), *value))
        })
    }

    /// Get the total number of items.
    pub fn len(&self) -> usize {
        self.pages.values().map(IndexMap::len).sum()
    }

    /// Check if there are no items at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of items that hold a yes or no.
    pub fn answered_count(&self) -> usize {
        self.iter().filter(|(_, _, value)| value.is_some()).count()
    }
}
