use crate::domain::{DomainError, DomainResult};

/// Role assigned to every account at signup
pub const ROLE_USER: &str = "user";

/// Role that unlocks write operations
pub const ROLE_ADMIN: &str = "admin";

/// Username and password exactly as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Both fields are required; no other rules apply
pub fn validate_credentials(credentials: &Credentials) -> DomainResult<()> {
    if credentials.username.is_empty() {
        return Err(DomainError::RequiredField("username"));
    }
    if credentials.password.is_empty() {
        return Err(DomainError::RequiredField("password"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_fields() {
        assert!(validate_credentials(&Credentials::new("bob", "pw")).is_ok());

        let err = validate_credentials(&Credentials::new("", "pw")).unwrap_err();
        assert_eq!(err.to_string(), "field username is required");

        let err = validate_credentials(&Credentials::new("bob", "")).unwrap_err();
        assert_eq!(err.to_string(), "field password is required");
    }
}
