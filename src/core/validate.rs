//! Field validation for the create/edit form. The storage boundary does
//! not validate; these checks gate the mutation instead.

use crate::errors::{AppError, AppResult};
use regex::Regex;

/// Strip the leading '@' and any whitespace from an Instagram handle.
pub fn sanitize_instagram(value: &str) -> String {
    value
        .replacen('@', "", 1)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Trimmed, non-empty first name.
pub fn validate_first_name(value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::MissingFirstName);
    }
    Ok(trimmed.to_string())
}

/// Optional field: empty input reads as "not provided".
pub fn validate_phone(value: Option<&str>) -> AppResult<Option<String>> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let re = Regex::new(r"^[0-9+()\-.\s]{7,}$").unwrap();
    if re.is_match(trimmed) {
        Ok(Some(trimmed.to_string()))
    } else {
        Err(AppError::InvalidPhone(trimmed.to_string()))
    }
}

/// Optional field; the handle is sanitized before matching.
pub fn validate_instagram(value: Option<&str>) -> AppResult<Option<String>> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let handle = sanitize_instagram(raw.trim());
    if handle.is_empty() {
        return Ok(None);
    }

    let re = Regex::new(r"^[A-Za-z0-9._]+$").unwrap();
    if re.is_match(&handle) {
        Ok(Some(handle))
    } else {
        Err(AppError::InvalidInstagram(handle))
    }
}
