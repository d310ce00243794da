//! Input validation shared by template backends.
//!
//! Required-field checks for save inputs and e-mail address syntax checks
//! for test sends. Backends surface violations as
//! [`TemplateError::Validation`] before touching any stored state.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{TemplateError, TemplateResult};
use crate::models::SaveTemplate;

/// Compiled e-mail address pattern
static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Returns the shared e-mail pattern, compiling it on first use
fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        // local-part@domain with at least one dot in the domain; syntax
        // screening only, deliverability is the mail server's problem
        Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("static e-mail pattern is valid")
    })
}

/// Validates an e-mail address for a test send
///
/// # Errors
///
/// Returns [`TemplateError::Validation`] if the address is malformed.
pub fn validate_email(email: &str) -> TemplateResult<()> {
    if email_pattern().is_match(email) {
        Ok(())
    } else {
        Err(TemplateError::validation(
            "email",
            format!("malformed e-mail address: '{email}'"),
        ))
    }
}

/// Validates the required fields of a save input
///
/// # Errors
///
/// Returns [`TemplateError::Validation`] if `name` or `subject` is blank.
pub fn validate_save(input: &SaveTemplate) -> TemplateResult<()> {
    if input.name.trim().is_empty() {
        return Err(TemplateError::validation("name", "must not be empty"));
    }
    if input.subject.trim().is_empty() {
        return Err(TemplateError::validation("subject", "must not be empty"));
    }
    Ok(())
}
