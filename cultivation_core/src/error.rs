//! Errors returned by the rules engine

use thiserror::Error;

/// Result alias used across the crate
pub type CoreResult<T> = Result<T, CoreError>;

/// A recoverable refusal or input problem.
///
/// Every operation that returns one of these leaves the records it was
/// handed untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A structurally required value is malformed or out of range
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The action's guard failed; `needed` carries the computed requirement when there is one
    #[error("{action} refused: {reason}")]
    PreconditionNotMet {
        action: &'static str,
        reason: String,
        needed: Option<u64>,
    },
}

impl CoreError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CoreError::InvalidInput(message.into())
    }

    pub fn refused(action: &'static str, reason: impl Into<String>) -> Self {
        CoreError::PreconditionNotMet {
            action,
            reason: reason.into(),
            needed: None,
        }
    }

    pub fn refused_needing(action: &'static str, reason: impl Into<String>, needed: u64) -> Self {
        CoreError::PreconditionNotMet {
            action,
            reason: reason.into(),
            needed: Some(needed),
        }
    }

    /// The requirement attached to a refusal, if any
    pub fn needed(&self) -> Option<u64> {
        match self {
            CoreError::PreconditionNotMet { needed, .. } => *needed,
            CoreError::InvalidInput(_) => None,
        }
    }

    pub fn is_refusal(&self) -> bool {
        matches!(self, CoreError::PreconditionNotMet { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refusal_carries_requirement() {
        let err = CoreError::refused_needing("level_up", "not enough experience", 500);
        assert!(err.is_refusal());
        assert_eq!(err.needed(), Some(500));
        assert_eq!(err.to_string(), "level_up refused: not enough experience");
    }

    #[test]
    fn test_invalid_input_has_no_requirement() {
        let err = CoreError::invalid("hp must be positive");
        assert!(!err.is_refusal());
        assert_eq!(err.needed(), None);
        assert_eq!(err.to_string(), "invalid input: hp must be positive");
    }
}
