//! Identifier rules shared by every definition kind.

use crate::{MAX_DEF_ID_LEN, MAX_FIELD_NAME_LEN, MAX_MODEL_NAME_LEN};
use thiserror::Error as ThisError;

///
/// IdentError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum IdentError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier '{0}' must be ASCII")]
    NotAscii(String),

    #[error("identifier '{ident}' exceeds max length {max}")]
    TooLong { ident: String, max: usize },
}

/// Ensure a model name is non-empty, ASCII, and within the cap.
pub fn validate_model_name(name: &str) -> Result<(), IdentError> {
    check(name, MAX_MODEL_NAME_LEN)
}

/// Ensure a field name is non-empty, ASCII, and within the cap.
pub fn validate_field_name(name: &str) -> Result<(), IdentError> {
    check(name, MAX_FIELD_NAME_LEN)
}

/// Ensure a view, action, or menu id is non-empty, ASCII, and within the cap.
pub fn validate_def_id(id: &str) -> Result<(), IdentError> {
    check(id, MAX_DEF_ID_LEN)
}

fn check(ident: &str, max: usize) -> Result<(), IdentError> {
    if ident.is_empty() {
        return Err(IdentError::Empty);
    }
    if !ident.is_ascii() {
        return Err(IdentError::NotAscii(ident.to_string()));
    }
    if ident.len() > max {
        return Err(IdentError::TooLong {
            ident: ident.to_string(),
            max,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_non_ascii_identifiers() {
        assert_eq!(validate_field_name(""), Err(IdentError::Empty));
        assert!(matches!(
            validate_model_name("hôtes"),
            Err(IdentError::NotAscii(_))
        ));
    }

    #[test]
    fn rejects_overlong_identifiers() {
        let long = "f".repeat(MAX_FIELD_NAME_LEN + 1);
        assert!(matches!(
            validate_field_name(&long),
            Err(IdentError::TooLong { max, .. }) if max == MAX_FIELD_NAME_LEN
        ));
    }

    #[test]
    fn accepts_ordinary_identifiers() {
        assert!(validate_model_name("hosts").is_ok());
        assert!(validate_field_name("internal_note").is_ok());
        assert!(validate_def_id("action_hosts_window").is_ok());
    }
}
