//! Request validation primitives
//!
//! Validation collects every field error before failing, so the client sees
//! all problems in one round trip. DTOs build a [`FieldErrors`] accumulator,
//! push violations, and finish with [`FieldErrors::into_result`].

use std::borrow::Cow;
use std::fmt;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: Cow<'static, str>,
}

/// Accumulator for field-level validation failures.
///
/// ## Examples
/// ```rust
/// use kernel::validation::FieldErrors;
///
/// let mut errors = FieldErrors::new();
/// if true {
///     errors.push("email", "Email is required");
/// }
/// assert!(errors.into_result().is_err());
/// ```
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<Cow<'static, str>>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when no errors were accumulated, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

impl fmt::Display for FieldErrors {
    /// `field: message; field: message; ...`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_accumulates_all_errors() {
        let mut errors = FieldErrors::new();
        errors.push("name", "Name is required");
        errors.push("email", "Must be a valid email");
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.errors().len(), 2);
    }

    #[test]
    fn test_display_joins_with_semicolons() {
        let mut errors = FieldErrors::new();
        errors.push("name", "Name is required");
        errors.push("email", "Must be a valid email");
        assert_eq!(
            errors.to_string(),
            "name: Name is required; email: Must be a valid email"
        );
    }
}
