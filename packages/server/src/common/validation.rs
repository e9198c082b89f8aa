//! Sign-up and sign-in form validation.
//!
//! Messages are user facing and returned per field so the landing page can
//! show them next to the matching input.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref EMAIL_FORMAT: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_WEAK: &str = "Password must be at least 8 characters with a number and a letter";
pub const PASSWORDS_MISMATCH: &str = "Passwords don't match";

/// Per-field validation errors. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

impl FormErrors {
    pub fn is_valid(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_FORMAT.is_match(email)
}

/// At least 8 characters with one ASCII letter and one digit.
pub fn validate_password(password: &str) -> bool {
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_number = password.chars().any(|c| c.is_ascii_digit());
    password.chars().count() >= 8 && has_letter && has_number
}

fn email_error(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        Some(EMAIL_REQUIRED.to_string())
    } else if !validate_email(email) {
        Some(EMAIL_INVALID.to_string())
    } else {
        None
    }
}

pub fn validate_sign_up_form(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> FormErrors {
    let password_error = if password.is_empty() {
        Some(PASSWORD_REQUIRED.to_string())
    } else if !validate_password(password) {
        Some(PASSWORD_WEAK.to_string())
    } else {
        None
    };

    FormErrors {
        name: name
            .trim()
            .is_empty()
            .then(|| NAME_REQUIRED.to_string()),
        email: email_error(email),
        password: password_error,
        confirm_password: (password != confirm_password).then(|| PASSWORDS_MISMATCH.to_string()),
    }
}

pub fn validate_sign_in_form(email: &str, password: &str) -> FormErrors {
    FormErrors {
        email: email_error(email),
        password: password
            .is_empty()
            .then(|| PASSWORD_REQUIRED.to_string()),
        ..FormErrors::default()
    }
}
