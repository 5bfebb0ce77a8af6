use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use super::Rule;

/// First validation message per field, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBag {
    errors: IndexMap<String, String>,
}

impl ErrorBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message for a field unless it already has one.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Get the message for a field.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Check if a field has a message.
    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Iterate over `(field, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    /// Get the number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if every field passed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A set of fields with their rules.
///
/// Build it once per form, then check single fields as they are edited with
/// [`validate`](Self::validate) or the whole form on submit with
/// [`validate_all`](Self::validate_all).
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    fields: IndexMap<String, Vec<Rule>>,
    attributes: HashMap<String, String>,
}

impl FormValidator {
    /// Create a validator with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field and its rules.
    pub fn field(mut self, name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.insert(name.into(), rules.into_iter().collect());
        self
    }

    /// Override how a field is named in messages.
    pub fn attribute(mut self, name: impl Into<String>, display: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), display.into());
        self
    }

    /// Get the rules of a field.
    pub fn rules(&self, field: &str) -> &[Rule] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// The name used for a field in messages: the override, or the key with
    /// underscores turned into spaces.
    pub fn display_name(&self, field: &str) -> String {
        self.attributes
            .get(field)
            .cloned()
            .unwrap_or_else(|| field.replace('_', " "))
    }

    /// Check one field. Undeclared fields always pass.
    pub fn validate(&self, field: &str, value: &str) -> Result<(), String> {
        let rules = self.rules(field);
        let optional = !rules.iter().any(Rule::demands_presence);
        if optional && value.trim().is_empty() {
            return Ok(());
        }

        match rules.iter().find(|rule| !rule.check(value)) {
            Some(rule) => Err(rule.message(&self.display_name(field))),
            None => Ok(()),
        }
    }

    /// Check every declared field. Fields missing from `values` count as empty.
    pub fn validate_all<'a, I>(&self, values: I) -> ErrorBag
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let values: HashMap<&str, &str> = values.into_iter().collect();
        let mut bag = ErrorBag::new();

        for field in self.fields.keys() {
            let value = values.get(field.as_str()).copied().unwrap_or_default();
            if let Err(message) = self.validate(field, value) {
                bag.add(field.clone(), message);
            }
        }

        debug!(fields = self.fields.len(), failed = bag.len(), "Form validated");
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> FormValidator {
        FormValidator::new()
            .field("username", [Rule::Required])
            .field("password", [Rule::Required, Rule::MinLength(4)])
            .field("email", [Rule::Email])
            .field("first_name", [Rule::Required])
            .attribute("first_name", "First Name")
    }

    #[test]
    fn first_failing_rule_wins() {
        let v = validator();
        assert_eq!(
            v.validate("password", ""),
            Err("The password field is required.".to_string())
        );
        assert_eq!(
            v.validate("password", "abc"),
            Err("The password field must be at least 4 characters.".to_string())
        );
        assert_eq!(v.validate("password", "abcd"), Ok(()));
    }

    #[test]
    fn optional_empty_field_passes() {
        let v = validator();
        assert_eq!(v.validate("email", ""), Ok(()));
        assert!(v.validate("email", "nope").is_err());
    }

    #[test]
    fn undeclared_field_passes() {
        assert_eq!(validator().validate("favourite_colour", ""), Ok(()));
    }

    #[test]
    fn validate_all_reports_missing_fields() {
        let bag = validator().validate_all([("username", "jane"), ("password", "abc")]);
        assert_eq!(bag.len(), 2);
        assert!(!bag.has("username"));
        assert_eq!(
            bag.first("password"),
            Some("The password field must be at least 4 characters.")
        );
        assert_eq!(bag.first("first_name"), Some("The First Name field is required."));
        assert_eq!(
            bag.iter().map(|(f, _)| f).collect::<Vec<_>>(),
            vec!["password", "first_name"]
        );
    }

    #[test]
    fn display_name_defaults_to_spaced_key() {
        assert_eq!(validator().display_name("password_confirmation"), "password confirmation");
    }
}
