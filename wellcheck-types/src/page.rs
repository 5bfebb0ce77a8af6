use indexmap::IndexMap;

use crate::{Goto, ItemRef, Visibility};

/// One card of the survey, shown at a specific step.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// The step at which this page is shown.
    step: usize,

    /// Optional heading text.
    text: Option<String>,

    /// Optional icon name, rendered above the items.
    icon: Option<String>,

    /// Gate on an answer given elsewhere in the survey.
    visibility: Visibility<ItemRef>,

    /// The yes/no questions on this page, in display order.
    items: IndexMap<String, Item>,
}

impl Page {
    /// Create an empty page shown at `step`.
    pub fn new(step: usize) -> Self {
        Self {
            step,
            text: None,
            icon: None,
            visibility: Visibility::Always,
            items: IndexMap::new(),
        }
    }

    /// Set the heading text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the icon name.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Only show this page when the referenced answer is yes.
    pub fn with_when_yes(mut self, page: impl Into<String>, item: impl Into<String>) -> Self {
        self.visibility = Visibility::WhenYes(ItemRef::new(page, item));
        self
    }

    /// Only show this page when the referenced answer is no.
    pub fn with_when_no(mut self, page: impl Into<String>, item: impl Into<String>) -> Self {
        self.visibility = Visibility::WhenNo(ItemRef::new(page, item));
        self
    }

    /// Append an item. A second item with the same key replaces the first in place.
    pub fn with_item(mut self, key: impl Into<String>, item: Item) -> Self {
        self.items.insert(key.into(), item);
        self
    }

    pub(crate) fn from_parts(
        step: usize,
        text: Option<String>,
        icon: Option<String>,
        visibility: Visibility<ItemRef>,
        items: IndexMap<String, Item>,
    ) -> Self {
        Self {
            step,
            text,
            icon,
            visibility,
            items,
        }
    }

    /// Get the step this page is shown at.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Get the heading text.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Get the icon name.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Get the visibility predicate.
    pub fn visibility(&self) -> &Visibility<ItemRef> {
        &self.visibility
    }

    /// Get all items in display order.
    pub fn items(&self) -> &IndexMap<String, Item> {
        &self.items
    }

    /// Get a single item by key.
    pub fn item(&self, key: &str) -> Option<&Item> {
        self.items.get(key)
    }

    /// Iterate over item keys in display order.
    pub fn item_keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }
}

/// A single yes/no question.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// The question text.
    text: String,

    /// Gate on a sibling item's answer.
    visibility: Visibility<String>,

    /// Redirect taken when answered yes.
    go_yes: Option<Goto>,

    /// Redirect taken when answered no.
    go_no: Option<Goto>,
}

impl Item {
    /// Create a new, always-visible item without overrides.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visibility: Visibility::Always,
            go_yes: None,
            go_no: None,
        }
    }

    /// Only show this item when the sibling item is answered yes.
    pub fn with_when_yes(mut self, sibling: impl Into<String>) -> Self {
        self.visibility = Visibility::WhenYes(sibling.into());
        self
    }

    /// Only show this item when the sibling item is answered no.
    pub fn with_when_no(mut self, sibling: impl Into<String>) -> Self {
        self.visibility = Visibility::WhenNo(sibling.into());
        self
    }

    /// Redirect the survey when this item is answered yes.
    pub fn with_go_yes(mut self, goto: impl Into<Goto>) -> Self {
        self.go_yes = Some(goto.into());
        self
    }

    /// Redirect the survey when this item is answered no.
    pub fn with_go_no(mut self, goto: impl Into<Goto>) -> Self {
        self.go_no = Some(goto.into());
        self
    }

    pub(crate) fn from_parts(
        text: String,
        visibility: Visibility<String>,
        go_yes: Option<Goto>,
        go_no: Option<Goto>,
    ) -> Self {
        Self {
            text,
            visibility,
            go_yes,
            go_no,
        }
    }

    /// Get the question text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the visibility predicate.
    pub fn visibility(&self) -> &Visibility<String> {
        &self.visibility
    }

    /// Get the yes redirect.
    pub fn go_yes(&self) -> Option<Goto> {
        self.go_yes
    }

    /// Get the no redirect.
    pub fn go_no(&self) -> Option<Goto> {
        self.go_no
    }

    /// Get the redirect that applies to `answer`, if any.
    pub fn goto_for(&self, answer: bool) -> Option<Goto> {
        if answer { self.go_yes } else { self.go_no }
    }
}
