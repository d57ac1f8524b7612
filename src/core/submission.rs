//! # Submission Outcome
//!
//! What a single delivery attempt amounted to, as far as the user is
//! concerned. The relay's error detail is logged where it happens; only the
//! classification travels back into the core.

use crate::relay::RelayError;

/// Why a submission failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// No response was received.
    NetworkError,
    /// The relay answered with a non-success status.
    ServerRejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(FailureReason),
}

impl SubmissionOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }
}

impl From<&RelayError> for FailureReason {
    fn from(err: &RelayError) -> Self {
        match err {
            RelayError::Rejected { .. } => FailureReason::ServerRejected,
            RelayError::Network(_) | RelayError::Config(_) => FailureReason::NetworkError,
        }
    }
}

impl From<Result<(), RelayError>> for SubmissionOutcome {
    fn from(result: Result<(), RelayError>) -> Self {
        match result {
            Ok(()) => SubmissionOutcome::Success,
            Err(e) => SubmissionOutcome::Failure(FailureReason::from(&e)),
        }
    }
}
