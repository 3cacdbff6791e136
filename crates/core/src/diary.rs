//! Trip diary constants and validation.

use crate::error::CoreError;

/// Maximum length for a diary entry's text.
pub const MAX_DIARY_TEXT_LENGTH: usize = 20_000;

/// All valid diary mood values.
pub const VALID_MOODS: &[&str] = &["great", "good", "okay", "tired", "bad"];

/// Validate that a mood string is one of the accepted values.
pub fn validate_mood(mood: &str) -> Result<(), CoreError> {
    if VALID_MOODS.contains(&mood) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid mood '{mood}'. Must be one of: {}",
            VALID_MOODS.join(", ")
        )))
    }
}

/// Validate diary text length.
pub fn validate_text(text: &str) -> Result<(), CoreError> {
    if text.len() > MAX_DIARY_TEXT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Diary text must be at most {MAX_DIARY_TEXT_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_moods_accepted() {
        for mood in VALID_MOODS {
            assert!(validate_mood(mood).is_ok());
        }
    }

    #[test]
    fn test_invalid_mood_rejected() {
        assert!(validate_mood("ecstatic").is_err());
        assert!(validate_mood("").is_err());
    }

    #[test]
    fn test_overlong_text_rejected() {
        assert!(validate_text(&"x".repeat(MAX_DIARY_TEXT_LENGTH + 1)).is_err());
        assert!(validate_text("short entry").is_ok());
    }
}
