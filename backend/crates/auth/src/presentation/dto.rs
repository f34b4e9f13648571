//! Auth Request / Response DTOs
//!
//! Wire-level payloads use camelCase field names.

use serde::{Deserialize, Serialize};

use kernel::validation::FieldErrors;

use crate::application::AuthenticatedOutput;
use crate::domain::entity::PublicUser;
use crate::error::AuthResult;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> AuthResult<()> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.push("name", "Name is required");
        }

        validate_email(&self.email, &mut errors);
        validate_password(&self.password, &mut errors);

        errors.into_result().map_err(Into::into)
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> AuthResult<()> {
        let mut errors = FieldErrors::new();

        validate_email(&self.email, &mut errors);

        if self.password.is_empty() {
            errors.push("password", "Password is required");
        }

        errors.into_result().map_err(Into::into)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[serde(default)]
    pub refresh_token: String,
}

impl RefreshRequest {
    pub fn validate(&self) -> AuthResult<()> {
        let mut errors = FieldErrors::new();

        if self.refresh_token.is_empty() {
            errors.push("refreshToken", "Refresh token is required");
        }

        errors.into_result().map_err(Into::into)
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Payload carried under `data` for register and login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthDataDto {
    pub user: PublicUser,
    pub access_token: String,
    pub refresh_token: String,
}

impl From<AuthenticatedOutput> for AuthDataDto {
    fn from(output: AuthenticatedOutput) -> Self {
        Self {
            user: output.user,
            access_token: output.access_token,
            refresh_token: output.refresh_token,
        }
    }
}

/// Payload carried under `data` for refresh
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshDataDto {
    pub access_token: String,
}

// ============================================================================
// Field validators
// ============================================================================

fn validate_email(email: &str, errors: &mut FieldErrors) {
    if email.is_empty() {
        errors.push("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.push("email", "Please provide a valid email");
    }
}

fn validate_password(password: &str, errors: &mut FieldErrors) {
    if password.is_empty() {
        errors.push("password", "Password is required");
        return;
    }
    if password.len() < 8 {
        errors.push(
            "password",
            "Password must be at least 8 characters long",
        );
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| "@$!%*?&".contains(c));
    if !(has_lower && has_upper && has_digit && has_special) {
        errors.push(
            "password",
            "Password must contain at least one uppercase letter, one lowercase letter, one number, and one special character",
        );
    }
}

/// local-part @ domain . tld, none of them empty, no whitespace
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn accepts_well_formed_registration() {
        assert!(register("Ada", "ada@example.com", "Sup3rSecret!").validate().is_ok());
    }

    #[test]
    fn rejects_missing_name() {
        let err = register("  ", "ada@example.com", "Sup3rSecret!")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("name: Name is required"));
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["adaexample.com", "ada@", "@example.com", "ada@example", "a b@c.io"] {
            let err = register("Ada", bad, "Sup3rSecret!").validate().unwrap_err();
            assert!(err.to_string().contains("valid email"), "accepted {bad}");
        }
    }

    #[test]
    fn rejects_weak_passwords() {
        // too short
        assert!(register("Ada", "ada@example.com", "Ab1!").validate().is_err());
        // missing character classes
        assert!(register("Ada", "ada@example.com", "alllowercase1!").validate().is_err());
        assert!(register("Ada", "ada@example.com", "NoDigitsHere!").validate().is_err());
        assert!(register("Ada", "ada@example.com", "NoSpecial123").validate().is_err());
    }

    #[test]
    fn collects_all_field_errors() {
        let err = register("", "", "").validate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Validation failed: "));
        assert!(msg.contains("name:"));
        assert!(msg.contains("email:"));
        assert!(msg.contains("password:"));
    }
}
