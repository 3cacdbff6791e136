//! Chat session constants and validation.

use crate::error::CoreError;

/// Message authored by the end user.
pub const SENDER_USER: &str = "user";

/// Message authored by the trip assistant.
pub const SENDER_ASSISTANT: &str = "assistant";

/// System-injected message (session bootstrap, tool output).
pub const SENDER_SYSTEM: &str = "system";

/// All valid sender role values.
pub const VALID_SENDERS: &[&str] = &[SENDER_USER, SENDER_ASSISTANT, SENDER_SYSTEM];

/// Maximum length for a chat message.
pub const MAX_MESSAGE_LENGTH: usize = 8_000;

/// Validate that a sender role string is one of the accepted values.
pub fn validate_sender(sender: &str) -> Result<(), CoreError> {
    if VALID_SENDERS.contains(&sender) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid sender '{sender}'. Must be one of: {}",
            VALID_SENDERS.join(", ")
        )))
    }
}

/// Validate chat message text: non-empty, bounded length.
pub fn validate_message(message: &str) -> Result<(), CoreError> {
    if message.trim().is_empty() {
        return Err(CoreError::Validation(
            "Chat message must not be empty".to_string(),
        ));
    }
    if message.len() > MAX_MESSAGE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Chat message must be at most {MAX_MESSAGE_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_senders_accepted() {
        assert!(validate_sender(SENDER_USER).is_ok());
        assert!(validate_sender(SENDER_ASSISTANT).is_ok());
        assert!(validate_sender(SENDER_SYSTEM).is_ok());
    }

    #[test]
    fn test_invalid_sender_rejected() {
        assert!(validate_sender("bot").is_err());
    }

    #[test]
    fn test_message_bounds() {
        assert!(validate_message("Where should we eat in Busan?").is_ok());
        assert!(validate_message("  ").is_err());
        assert!(validate_message(&"x".repeat(MAX_MESSAGE_LENGTH + 1)).is_err());
    }
}
