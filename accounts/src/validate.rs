//! Client-side validation for the login and registration forms.
//!
//! Validation runs before any request is built; a form that fails here never
//! reaches the transport. Messages are per field so the form can render them
//! next to the offending input.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::fmt;

/// Which auth form is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Registration,
}

impl AuthMode {
    #[must_use]
    pub fn is_registration(self) -> bool {
        matches!(self, Self::Registration)
    }
}

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub name: String,
    pub password: String,
    pub confirm_password: String,
}

/// Input that passed validation and is ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    Login { email: String, password: String },
    Registration { email: String, name: String, password: String },
}

impl Credentials {
    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Login { email, .. } | Self::Registration { email, .. } => email,
        }
    }
}

/// Per-field validation messages; `None` means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub name: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.name.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }

    fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        [
            ("email", self.email),
            ("name", self.name),
            ("password", self.password),
            ("confirm_password", self.confirm_password),
        ]
        .into_iter()
        .filter_map(|(field, message)| message.map(|m| (field, m)))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(field, msg)| format!("{field}: {msg}")).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

pub const EMAIL_REQUIRED_LOGIN: &str = "Enter your email";
pub const EMAIL_REQUIRED_REGISTRATION: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email";
pub const PASSWORD_REQUIRED_LOGIN: &str = "Enter your password (it cannot be blank)";
pub const PASSWORD_REQUIRED_REGISTRATION: &str = "Password is required and cannot be blank";
pub const NAME_REQUIRED: &str = "Name is required";
pub const CONFIRM_REQUIRED: &str = "Password confirmation is required";
pub const CONFIRM_MISMATCH: &str = "Passwords do not match";

impl AuthForm {
    /// Validate for `mode`, returning what should be sent.
    ///
    /// The password is trimmed before it is checked and sent; the confirmation
    /// is compared against the trimmed password after trimming it too.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self, mode: AuthMode) -> Result<Credentials, FieldErrors> {
        let registering = mode.is_registration();
        let mut errors = FieldErrors::default();

        if self.email.is_empty() {
            errors.email = Some(if registering {
                EMAIL_REQUIRED_REGISTRATION
            } else {
                EMAIL_REQUIRED_LOGIN
            });
        } else if !is_valid_email(&self.email) {
            errors.email = Some(EMAIL_INVALID);
        }

        let password = self.password.trim();
        if password.is_empty() {
            errors.password = Some(if registering {
                PASSWORD_REQUIRED_REGISTRATION
            } else {
                PASSWORD_REQUIRED_LOGIN
            });
        }

        if registering {
            if self.name.trim().is_empty() {
                errors.name = Some(NAME_REQUIRED);
            }
            let confirm = self.confirm_password.trim();
            if confirm.is_empty() {
                errors.confirm_password = Some(CONFIRM_REQUIRED);
            } else if confirm != password {
                errors.confirm_password = Some(CONFIRM_MISMATCH);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let email = self.email.clone();
        let password = password.to_owned();
        Ok(match mode {
            AuthMode::Login => Credentials::Login { email, password },
            AuthMode::Registration => Credentials::Registration {
                email,
                name: self.name.trim().to_owned(),
                password,
            },
        })
    }
}

/// Structural email check: `local@domain.tld`, no whitespace, sane labels.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains('@') || local.starts_with('.') || local.ends_with('.') {
        return false;
    }
    if local.contains("..") {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(char::is_alphabetic));
    tld_ok
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
}
