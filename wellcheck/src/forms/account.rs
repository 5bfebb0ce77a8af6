use super::{ErrorBag, FormValidator, Rule};

const CONFIRMATION_FIELD: &str = "password_confirmation";
const CONFIRMATION_REQUIRED: &str = "Field Password Confirmation is required.";
const CONFIRMATION_MISMATCH: &str = "Fields do not match.";

/// Check a password confirmation on submit.
///
/// Matching values pass (including both empty; whether the password itself is
/// required is up to the form's rules).
pub fn confirm_password(password: &str, confirmation: &str) -> Result<(), &'static str> {
    if password == confirmation {
        Ok(())
    } else if confirmation.is_empty() {
        Err(CONFIRMATION_REQUIRED)
    } else {
        Err(CONFIRMATION_MISMATCH)
    }
}

fn bool_value(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Sign-in credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validator() -> FormValidator {
        FormValidator::new()
            .field("username", [Rule::Required])
            .field("password", [Rule::Required, Rule::MinLength(4)])
    }

    pub fn validate(&self) -> ErrorBag {
        Self::validator().validate_all([
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ])
    }
}

/// First step of password recovery: where to send the code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoveryEmailForm {
    pub email: String,
}

impl RecoveryEmailForm {
    pub fn validator() -> FormValidator {
        FormValidator::new().field("email", [Rule::Required, Rule::Email])
    }

    pub fn validate(&self) -> ErrorBag {
        Self::validator().validate_all([("email", self.email.as_str())])
    }
}

/// Second step of password recovery: the code from the email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoveryCodeForm {
    pub token: String,
}

impl RecoveryCodeForm {
    pub fn validator() -> FormValidator {
        FormValidator::new().field("token", [Rule::Required])
    }

    pub fn validate(&self) -> ErrorBag {
        Self::validator().validate_all([("token", self.token.as_str())])
    }
}

/// Last step of password recovery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPasswordForm {
    pub password: String,
    pub password_confirmation: String,
    /// The verified recovery code, carried over from the previous step.
    pub token: String,
}

impl NewPasswordForm {
    pub fn validator() -> FormValidator {
        FormValidator::new().field("password", [Rule::Required])
    }

    pub fn validate(&self) -> ErrorBag {
        let mut errors = Self::validator().validate_all([("password", self.password.as_str())]);
        if let Err(message) = confirm_password(&self.password, &self.password_confirmation) {
            errors.add(CONFIRMATION_FIELD, message);
        }
        errors
    }
}

/// Account details, used both for registration and for editing a signed-in profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password_confirmation: String,
    pub has_user_agreement: bool,
}

impl ProfileForm {
    /// Message shown while typing a confirmation that differs from the password.
    pub const LIVE_MISMATCH: &'static str = "Passwords are not matching.";

    /// Rules for the profile form. Registering requires a password and the user
    /// agreement; a signed-in user may leave the password empty to keep it.
    pub fn validator(authenticated: bool) -> FormValidator {
        let name_rules = [Rule::Required, Rule::MinLength(3), Rule::AlphaNum];
        let validator = FormValidator::new()
            .field("username", name_rules)
            .field("last_name", name_rules)
            .field("first_name", name_rules)
            .field("email", [Rule::Email])
            .field("phone", [Rule::Required])
            .attribute("last_name", "Last Name")
            .attribute("first_name", "First Name")
            .attribute(CONFIRMATION_FIELD, "Password Confirmation");

        if authenticated {
            validator.field("password", [Rule::MinLength(6)])
        } else {
            validator
                .field("password", [Rule::Required, Rule::MinLength(6)])
                .field("has_user_agreement", [Rule::Accepted])
        }
    }

    /// Check the confirmation while it is being typed.
    pub fn live_confirmation_error(&self) -> Option<&'static str> {
        (self.password != self.password_confirmation).then_some(Self::LIVE_MISMATCH)
    }

    /// Check the whole form on submit.
    pub fn validate(&self, authenticated: bool) -> ErrorBag {
        let mut errors = Self::validator(authenticated).validate_all([
            ("username", self.username.as_str()),
            ("last_name", self.last_name.as_str()),
            ("first_name", self.first_name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("password", self.password.as_str()),
            ("has_user_agreement", bool_value(self.has_user_agreement)),
        ]);
        if let Err(message) = confirm_password(&self.password, &self.password_confirmation) {
            errors.add(CONFIRMATION_FIELD, message);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> ProfileForm {
        ProfileForm {
            username: "jdoe42".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "5555550100".to_string(),
            password: "secret1".to_string(),
            password_confirmation: "secret1".to_string(),
            has_user_agreement: true,
        }
    }

    #[test]
    fn login_rules() {
        let errors = LoginForm::default().validate();
        assert_eq!(errors.first("username"), Some("The username field is required."));
        assert_eq!(errors.first("password"), Some("The password field is required."));

        let errors = LoginForm {
            username: "jane".to_string(),
            password: "abc".to_string(),
        }
        .validate();
        assert_eq!(
            errors.first("password"),
            Some("The password field must be at least 4 characters.")
        );
        assert!(!errors.has("username"));
    }

    #[test]
    fn recovery_forms() {
        let errors = RecoveryEmailForm {
            email: "jane@".to_string(),
        }
        .validate();
        assert_eq!(errors.first("email"), Some("The email field must be a valid email."));

        assert!(RecoveryCodeForm::default().validate().has("token"));
        assert!(
            RecoveryCodeForm {
                token: "482913".to_string()
            }
            .validate()
            .is_empty()
        );
    }

    #[test]
    fn new_password_confirmation() {
        let form = NewPasswordForm {
            password: "hunter22".to_string(),
            password_confirmation: String::new(),
            token: "482913".to_string(),
        };
        assert_eq!(form.validate().first(CONFIRMATION_FIELD), Some(CONFIRMATION_REQUIRED));

        let form = NewPasswordForm {
            password_confirmation: "hunter23".to_string(),
            ..form
        };
        assert_eq!(form.validate().first(CONFIRMATION_FIELD), Some(CONFIRMATION_MISMATCH));

        let form = NewPasswordForm {
            password_confirmation: "hunter22".to_string(),
            ..form
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn valid_registration() {
        assert!(registration().validate(false).is_empty());
    }

    #[test]
    fn registration_requires_agreement_and_password() {
        let form = ProfileForm {
            password: String::new(),
            password_confirmation: String::new(),
            has_user_agreement: false,
            ..registration()
        };
        let errors = form.validate(false);
        assert_eq!(errors.first("password"), Some("The password field is required."));
        assert_eq!(
            errors.first("has_user_agreement"),
            Some("The has user agreement field must be accepted.")
        );

        // Signed-in users keep their password when the field is left empty.
        assert!(form.validate(true).is_empty());
    }

    #[test]
    fn profile_name_rules_use_display_names() {
        let form = ProfileForm {
            first_name: "Jo".to_string(),
            last_name: "O'Neil".to_string(),
            ..registration()
        };
        let errors = form.validate(true);
        assert_eq!(
            errors.first("first_name"),
            Some("The First Name field must be at least 3 characters.")
        );
        assert_eq!(
            errors.first("last_name"),
            Some("The Last Name field may only contain alpha-numeric characters.")
        );
    }

    #[test]
    fn profile_password_confirmation() {
        let form = ProfileForm {
            password_confirmation: "secret2".to_string(),
            ..registration()
        };
        assert_eq!(form.live_confirmation_error(), Some(ProfileForm::LIVE_MISMATCH));
        assert_eq!(
            form.validate(true).first(CONFIRMATION_FIELD),
            Some(CONFIRMATION_MISMATCH)
        );
        assert_eq!(registration().live_confirmation_error(), None);
    }
}
