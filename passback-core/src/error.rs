//! Error types for passback-core

use thiserror::Error;

use crate::ags::AgsError;

/// Failures of one grade submission.
///
/// The two `Missing*` messages are part of the tool's response contract and
/// must not be reworded.
#[derive(Debug, Error)]
pub enum GradeError {
    /// The launch token carries no platform context or no AGS endpoint
    #[error("platformContext or endpoint is undefined")]
    MissingContext,

    /// Line-item creation was needed but the launch has no resource link
    #[error("platformContext.resource is undefined")]
    MissingResource,

    /// The caller's grade is not interpretable as a finite number
    #[error("grade is not a number: {0}")]
    InvalidGrade(String),

    /// The platform integration client failed; the raw downstream message
    /// is surfaced as-is
    #[error(transparent)]
    Downstream(#[from] AgsError),
}

impl GradeError {
    /// Whether the failure is the caller's fault (bad request) rather than a
    /// downstream one.
    pub fn is_caller_fault(&self) -> bool {
        matches!(
            self,
            Self::MissingContext | Self::MissingResource | Self::InvalidGrade(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_context_uses_the_contract_message() {
        assert_eq!(
            GradeError::MissingContext.to_string(),
            "platformContext or endpoint is undefined"
        );
    }

    #[test]
    fn missing_resource_uses_the_contract_message() {
        assert_eq!(
            GradeError::MissingResource.to_string(),
            "platformContext.resource is undefined"
        );
    }

    #[test]
    fn downstream_error_is_transparent() {
        let error = GradeError::from(AgsError::Platform("timeout".to_string()));
        assert_eq!(error.to_string(), "timeout");
        assert!(!error.is_caller_fault());
    }

    #[test]
    fn caller_fault_classification() {
        assert!(GradeError::MissingContext.is_caller_fault());
        assert!(GradeError::MissingResource.is_caller_fault());
        assert!(GradeError::InvalidGrade("abc".to_string()).is_caller_fault());
    }
}
