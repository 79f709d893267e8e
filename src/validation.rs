//! Input validation for values sent to GitHub.

use crate::error::{PdError, Result};

/// Maximum allowed length for a milestone or project title.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Length of a label color in hex digits, without the leading `#`.
pub const COLOR_LENGTH: usize = 6;

/// Validates a milestone or project title.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(PdError::Validation("Title cannot be empty".to_string()));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(PdError::Validation(format!(
            "Title exceeds maximum length of {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(())
}

/// Validates a label color: exactly six hex digits, no `#`.
pub fn validate_color(color: &str) -> Result<()> {
    if color.len() != COLOR_LENGTH || !color.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PdError::Validation(format!(
            "Color '{}' must be {} hex digits without '#'",
            color, COLOR_LENGTH
        )));
    }
    Ok(())
}
