use std::fmt;

use serde::{Deserialize, Serialize};

/// A reference to a single item on a page, e.g. `{"page": "testing", "item": "positive"}`.
///
/// Used by page visibility predicates to point at an answer given on an earlier page.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    /// Key of the page holding the item.
    pub page: String,

    /// Key of the item within that page.
    pub item: String,
}

impl ItemRef {
    /// Create a new reference from a page key and an item key.
    pub fn new(page: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            item: item.into(),
        }
    }

    /// Get the page key.
    pub fn page(&self) -> &str {
        &self.page
    }

    /// Get the item key.
    pub fn item(&self) -> &str {
        &self.item
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.page, self.item)
    }
}

impl<P: Into<String>, I: Into<String>> From<(P, I)> for ItemRef {
    fn from((page, item): (P, I)) -> Self {
        Self::new(page, item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let item = ItemRef::new("testing", "positive");
        assert_eq!(item.to_string(), "testing.positive");
    }

    #[test]
    fn from_tuple() {
        let item: ItemRef = ("exposure", "close_contact").into();
        assert_eq!(item.page(), "exposure");
        assert_eq!(item.item(), "close_contact");
    }

    #[test]
    fn deserialize() {
        let item: ItemRef =
            serde_json::from_str(r#"{"page": "testing", "item": "positive"}"#).unwrap();
        assert_eq!(item, ItemRef::new("testing", "positive"));
    }
}
