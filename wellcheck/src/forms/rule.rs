use std::str::FromStr;

/// A single validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Must not be empty or whitespace.
    Required,

    /// Must have at least this many characters.
    MinLength(usize),

    /// Letters and digits only.
    AlphaNum,

    /// Must look like an email address.
    Email,

    /// Must be a yes-ish value (`true`, `1`, `yes`, `on`), e.g. a ticked agreement box.
    Accepted,
}

/// Error type for rule strings such as `"required|min:4"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleParseError {
    #[error("Unknown rule '{0}'")]
    UnknownRule(String),

    #[error("Invalid argument '{argument}' for rule '{rule}'")]
    InvalidArgument { rule: String, argument: String },
}

impl Rule {
    /// Parse a `|`-separated rule list, e.g. `"required|min:3|alpha_num"`.
    ///
    /// An empty string yields no rules.
    pub fn parse_list(rules: &str) -> Result<Vec<Rule>, RuleParseError> {
        rules
            .split('|')
            .map(str::trim)
            .filter(|rule| !rule.is_empty())
            .map(str::parse)
            .collect()
    }

    /// Check a value against this rule.
    pub fn check(&self, value: &str) -> bool {
        match self {
            Self::Required => !value.trim().is_empty(),
            Self::MinLength(min) => value.chars().count() >= *min,
            Self::AlphaNum => value.chars().all(char::is_alphanumeric),
            Self::Email => is_valid_email(value),
            Self::Accepted => matches!(value.trim(), "true" | "1" | "yes" | "on"),
        }
    }

    /// Rules that must be checked even on an empty value.
    pub fn demands_presence(&self) -> bool {
        matches!(self, Self::Required | Self::Accepted)
    }

    /// The failure message for a field shown as `attribute`.
    pub fn message(&self, attribute: &str) -> String {
        match self {
            Self::Required => format!("The {attribute} field is required."),
            Self::MinLength(min) => {
                format!("The {attribute} field must be at least {min} characters.")
            }
            Self::AlphaNum => {
                format!("The {attribute} field may only contain alpha-numeric characters.")
            }
            Self::Email => format!("The {attribute} field must be a valid email."),
            Self::Accepted => format!("The {attribute} field must be accepted."),
        }
    }
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, argument) = match s.split_once(':') {
            Some((name, argument)) => (name, Some(argument)),
            None => (s, None),
        };

        match (name, argument) {
            ("required", None) => Ok(Self::Required),
            // `required:true` is how checkboxes are marked as mandatory.
            ("required", Some("true")) => Ok(Self::Accepted),
            ("accepted", None) => Ok(Self::Accepted),
            ("alpha_num", None) => Ok(Self::AlphaNum),
            ("email", None) => Ok(Self::Email),
            ("min", Some(argument)) => argument.parse().map(Self::MinLength).map_err(|_| {
                RuleParseError::InvalidArgument {
                    rule: name.to_string(),
                    argument: argument.to_string(),
                }
            }),
            (name, Some(argument)) if ["required", "accepted", "alpha_num", "email"].contains(&name) => {
                Err(RuleParseError::InvalidArgument {
                    rule: name.to_string(),
                    argument: argument.to_string(),
                })
            }
            _ => Err(RuleParseError::UnknownRule(s.to_string())),
        }
    }
}

/// Loose email shape check: `local@domain.tld`, no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
