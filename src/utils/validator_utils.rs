use std::borrow::Cow;
use validator::ValidationError;

pub const REQUIRED_CODE: &str = "is_required";

/// Whitespace-only input counts as missing.
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(|c| !c.is_whitespace()) {
        return Ok(());
    }
    Err(ValidationError::new(REQUIRED_CODE).with_message(Cow::Borrowed("Can't be blank")))
}
