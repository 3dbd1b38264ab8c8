//! Required-field checks run by the client before any request is sent.

use crate::error::CoreError;

/// Message shown when a multi-field form has a blank field.
pub const MSG_FILL_ALL_FIELDS: &str = "Please fill all fields";

/// Message shown when the add-user form is blank.
pub const MSG_ENTER_USERNAME: &str = "Please enter a username";

/// Fail with `message` if any of `values` is empty or whitespace only.
pub fn require_all(values: &[&str], message: &str) -> Result<(), CoreError> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(CoreError::Validation(message.to_string()));
    }
    Ok(())
}
