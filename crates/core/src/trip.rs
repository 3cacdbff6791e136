//! Trip and participant constants and validation.

use crate::error::CoreError;

/// Maximum length for a trip title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for a checklist item's content.
pub const MAX_CHECKLIST_CONTENT_LENGTH: usize = 500;

/// Participant owns the trip and can delete it.
pub const ROLE_OWNER: &str = "owner";

/// Participant can edit trip content.
pub const ROLE_EDITOR: &str = "editor";

/// Participant can only view trip content.
pub const ROLE_VIEWER: &str = "viewer";

/// All valid participant role values.
pub const VALID_ROLES: &[&str] = &[ROLE_OWNER, ROLE_EDITOR, ROLE_VIEWER];

/// Validate that a participant role string is one of the accepted values.
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid participant role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        )))
    }
}

/// Validate a trip title: non-empty after trimming, bounded length.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Trip title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Trip title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate checklist item content.
pub fn validate_checklist_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Checklist content must not be empty".to_string(),
        ));
    }
    if content.len() > MAX_CHECKLIST_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Checklist content must be at most {MAX_CHECKLIST_CONTENT_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_roles_accepted() {
        assert!(validate_role(ROLE_OWNER).is_ok());
        assert!(validate_role(ROLE_EDITOR).is_ok());
        assert!(validate_role(ROLE_VIEWER).is_ok());
    }

    #[test]
    fn test_invalid_role_rejected() {
        let result = validate_role("admin");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid participant role"));
    }

    #[test]
    fn test_empty_title_rejected() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn test_overlong_title_rejected() {
        let title = "a".repeat(MAX_TITLE_LENGTH + 1);
        assert!(validate_title(&title).is_err());
    }

    #[test]
    fn test_reasonable_title_accepted() {
        assert!(validate_title("Jeju island long weekend").is_ok());
    }

    #[test]
    fn test_checklist_content_bounds() {
        assert!(validate_checklist_content("Pack sunscreen").is_ok());
        assert!(validate_checklist_content(" ").is_err());
        assert!(validate_checklist_content(&"x".repeat(501)).is_err());
    }
}
