use crate::error::{Result, TodozError};
use crate::model::User;
use crate::store::DataStore;
use uuid::Uuid;

/// Resolve a user or fail with `UserNotFound`. Every user-scoped command
/// calls this before looking at any other argument.
pub fn find_user<S: DataStore>(store: &S, user_id: &Uuid) -> Result<User> {
    store.get_user(user_id)
}

pub fn validate_email(email: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(TodozError::invalid("Email cannot be empty."));
    }
    if !email.contains('@') {
        return Err(TodozError::invalid("Email must contain '@'."));
    }
    Ok(())
}

/// `label` is the sentence subject, e.g. "Password" or "New password".
pub fn validate_password(password: &str, min_len: usize, label: &str) -> Result<()> {
    if password.chars().count() < min_len {
        return Err(TodozError::invalid(format!(
            "{} must be at least {} characters long.",
            label, min_len
        )));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(TodozError::invalid("Todo title cannot be empty."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_must_be_non_blank_and_contain_at() {
        assert!(validate_email("alice@example.com").is_ok());
        assert_eq!(
            validate_email("   ").unwrap_err().to_string(),
            "Email cannot be empty."
        );
        assert_eq!(
            validate_email("alice.example.com").unwrap_err().to_string(),
            "Email must contain '@'."
        );
    }

    #[test]
    fn password_length_boundary() {
        assert!(validate_password("123456", 6, "Password").is_ok());
        let err = validate_password("12345", 6, "Password").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Password must be at least 6 characters long."
        );
    }

    #[test]
    fn password_length_counts_characters() {
        assert!(validate_password("ééééé", 6, "Password").is_err());
        assert!(validate_password("éééééé", 6, "Password").is_ok());
    }

    #[test]
    fn title_is_trimmed_before_checking() {
        assert!(validate_title("  x ").is_ok());
        assert!(validate_title(" \t ").is_err());
        assert!(validate_title("").is_err());
    }
}
