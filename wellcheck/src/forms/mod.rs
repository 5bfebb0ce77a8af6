//! Field validation for the account forms (login, password recovery, profile).
//!
//! Each field carries a list of [`Rule`]s. A [`FormValidator`] checks values against
//! them and reports the first failing message per field in an [`ErrorBag`].
//! Optional fields (no `Required` rule) that are left empty are not checked at all.

mod rule;
pub use rule::{Rule, RuleParseError};

mod validator;
pub use validator::{ErrorBag, FormValidator};

mod account;
pub use account::{
    LoginForm, NewPasswordForm, ProfileForm, RecoveryCodeForm, RecoveryEmailForm,
    confirm_password,
};
