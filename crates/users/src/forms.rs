//! Form validation for user-creation input.
//!
//! Forms are plain structs with free validation; the request layer
//! owns collecting the input and rendering the per-field errors.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MIN_PASSWORD_LENGTH: usize = 6;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Per-field error collection produced by form validation.
///
/// Validation reports every failing field at once rather than stopping
/// at the first one.
#[derive(Debug, Clone, Default, PartialEq, Error, Serialize)]
#[error("form validation failed on {} field(s)", .errors.len())]
pub struct FormErrors {
    pub errors: Vec<FieldError>,
}

impl FormErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages recorded for a given field
    pub fn for_field(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }
}

/// Form for adding users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAddForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserAddForm {
    /// Validate the form, collecting every field failure.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();

        if self.first_name.trim().is_empty() {
            errors.push("first_name", "First name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.push("last_name", "Last name is required");
        }
        if self.username.trim().is_empty() {
            errors.push("username", "Username is required");
        }
        if !is_email_shaped(&self.email) {
            errors.push("email", "Invalid email format");
        }
        if self.password.len() < MIN_PASSWORD_LENGTH {
            errors.push(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters long"),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_email_shaped(email: &str) -> bool {
    let email_regex = match Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$") {
        Ok(regex) => regex,
        Err(_) => return false,
    };

    email_regex.is_match(email) && email.len() <= 255
}
