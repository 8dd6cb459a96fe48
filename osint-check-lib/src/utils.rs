//! Utility functions for input validation and URL templating.
//!
//! This module contains helper functions shared by the probe path: username
//! validation and `{username}` placeholder substitution.

use crate::error::OsintCheckError;
use regex::Regex;

lazy_static::lazy_static! {
    /// Characters accepted across the default platform set. Stricter
    /// platform-specific rules are left to the platforms themselves.
    static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9._-]+$").unwrap();
}

/// Maximum username length accepted before probing.
const MAX_USERNAME_LEN: usize = 64;

/// Validate a username before any request is issued.
///
/// # Returns
///
/// `Ok(())` if acceptable, `Err(OsintCheckError::InvalidUsername)` otherwise.
pub fn validate_username(username: &str) -> Result<(), OsintCheckError> {
    if username.is_empty() {
        return Err(OsintCheckError::invalid_username(
            username,
            "Username cannot be empty",
        ));
    }

    if username.len() > MAX_USERNAME_LEN {
        return Err(OsintCheckError::invalid_username(
            username,
            format!("Username longer than {} characters", MAX_USERNAME_LEN),
        ));
    }

    if !USERNAME_RE.is_match(username) {
        return Err(OsintCheckError::invalid_username(
            username,
            "Username may only contain letters, digits, '.', '_' and '-'",
        ));
    }

    Ok(())
}

/// Substitute a username into a URL template.
///
/// Every `{username}` placeholder in the template is replaced.
pub fn fill_template(template: &str, username: &str) -> String {
    template.replace("{username}", username)
}
