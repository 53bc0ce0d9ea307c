use once_cell::sync::Lazy;
use regex::Regex;
use rustrict::CensorStr;
use validator::ValidationError;

use crate::constants::{MAX_PSEUDO_LENGTH, MIN_PASSWORD_LENGTH, MIN_PSEUDO_LENGTH};

static PASSWORD_SPECIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("special char pattern"));

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || !email.contains('@') {
        return Err(ValidationError::new("invalid_email_format"));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let has_minimum_length = password.len() >= MIN_PASSWORD_LENGTH;
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = PASSWORD_SPECIAL.is_match(password);

    if !has_minimum_length || !has_uppercase || !has_lowercase || !has_digit || !has_special {
        return Err(ValidationError::new("invalid_password"));
    }
    Ok(())
}

pub fn validate_pseudo(pseudo: &str) -> Result<(), ValidationError> {
    let len = pseudo.chars().count();
    if len < MIN_PSEUDO_LENGTH || len > MAX_PSEUDO_LENGTH {
        return Err(ValidationError::new("invalid_pseudo_length"));
    }
    if !pseudo.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_pseudo_charset"));
    }
    if pseudo.is_inappropriate() {
        return Err(ValidationError::new("inappropriate_pseudo"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_requires_at_sign() {
        assert!(validate_email("player@example.com").is_ok());
        assert!(validate_email("player.example.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_password_needs_all_classes() {
        assert!(validate_password("Str0ng!pass").is_ok());
        assert!(validate_password("weakpass").is_err());
        assert!(validate_password("NoDigits!").is_err());
        assert!(validate_password("short1!A").is_ok());
    }

    #[test]
    fn test_pseudo_charset_and_length() {
        assert!(validate_pseudo("case_hunter42").is_ok());
        assert!(validate_pseudo("ab").is_err());
        assert!(validate_pseudo("has space").is_err());
        assert!(validate_pseudo(&"x".repeat(25)).is_err());
    }
}
