//! Input validation for contact form fields and configuration values.

use crate::error::ValidationError;

/// Reject empty or whitespace-only values.
pub fn validate_required(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validate that a URL is http(s).
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    validate_required("URL", url)?;

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ValidationError::InvalidUrl {
            url: url.to_string(),
            reason: "URL must start with http:// or https://".to_string(),
        });
    }

    Ok(())
}

/// Validate email format: one `@`, non-empty local part, dotted domain.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    validate_required("Email", email)?;
    let email = email.trim();

    let invalid = |reason: &str| ValidationError::InvalidEmail {
        email: email.to_string(),
        reason: reason.to_string(),
    };

    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid("Email must contain @ symbol"));
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid("Email must have username and domain parts"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(invalid("Email must not contain spaces"));
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid("Domain must contain dot"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_valid_urls() {
        assert!(validate_url("http://localhost:3000").is_ok());
        assert!(validate_url("https://api.emailjs.com/api/v1.0/email/send").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_invalid_urls() {
        assert!(validate_url("").is_err());
        assert!(validate_url("api.emailjs.com").is_err());
        assert!(validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("Name", "Ada").is_ok());
        assert_eq!(
            validate_required("Name", "   "),
            Err(ValidationError::EmptyField {
                field: "Name".to_string()
            })
        );
    }

    #[test]
    fn test_validate_email_accepts_valid_emails() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("test.email@domain.org").is_ok());
        assert!(validate_email("  hi@ihsan.cc ").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_invalid_emails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@domain.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@domain").is_err());
        assert!(validate_email("user@domain@com").is_err());
        assert!(validate_email("us er@domain.com").is_err());
        assert!(validate_email("user@domain.").is_err());
    }
}
