//! Client-side URL validation for the summarizer form.
//!
//! Blank input is reported separately from malformed input so the form can
//! show the more helpful message.

use thiserror::Error;
use url::Url;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a URL")]
    Missing,
    #[error("Please enter a valid URL (must include http:// or https://)")]
    Invalid,
}

/// Returns true when `input` parses as an absolute `http` or `https` URL.
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Validate raw form input, returning the trimmed URL to submit.
pub fn validate(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing);
    }
    if !is_valid_url(trimmed) {
        return Err(ValidationError::Invalid);
    }
    Ok(trimmed.to_string())
}
