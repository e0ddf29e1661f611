use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{archive::StoreError, models::atmospheric::plume::DispersionError};

/// Errors surfaced by [`SimulationService`](super::SimulationService).
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The request was rejected by the model.
    #[error(transparent)]
    Dispersion(#[from] DispersionError),

    /// The archive could not complete the operation.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Failure category reported to clients.
///
/// Validation kinds mean the request itself is wrong and retrying it will not
/// help; [`ErrorKind::StorageUnavailable`] means the same request may succeed
/// later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidStabilityClass,
    InvalidParameter,
    StorageUnavailable,
}

impl ErrorKind {
    /// Returns `true` for input validation failures.
    #[must_use]
    pub fn is_validation(self) -> bool {
        !matches!(self, Self::StorageUnavailable)
    }
}

/// Structured error body for transport shells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub kind: ErrorKind,
    pub message: String,
}

impl SimulationError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Dispersion(DispersionError::InvalidStabilityClass { .. }) => {
                ErrorKind::InvalidStabilityClass
            }
            Self::Dispersion(DispersionError::InvalidParameter { .. }) => {
                ErrorKind::InvalidParameter
            }
            Self::Storage(_) => ErrorKind::StorageUnavailable,
        }
    }

    #[must_use]
    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn validation_payloads() {
        let error = SimulationError::from(DispersionError::InvalidParameter {
            parameter: "wind velocity",
            source: ConstraintError::Zero,
        });
        let payload = error.payload();

        assert_eq!(payload.kind, ErrorKind::InvalidParameter);
        assert_eq!(
            payload.message,
            "invalid parameter `wind velocity`: value must not be zero"
        );
        assert!(payload.kind.is_validation());
    }

    #[test]
    fn storage_is_not_a_validation_failure() {
        let error = SimulationError::from(StoreError::Unavailable {
            context: "offline".to_string(),
        });

        assert_eq!(error.kind(), ErrorKind::StorageUnavailable);
        assert!(!error.kind().is_validation());
        assert_eq!(
            serde_json::to_value(error.payload()).unwrap(),
            serde_json::json!({
                "kind": "StorageUnavailable",
                "message": "store unavailable: offline",
            })
        );
    }
}
