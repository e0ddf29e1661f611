use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while evaluating the Gaussian plume model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispersionError {
    /// The stability class is not one of the Pasquill–Gifford classes A–F.
    #[error("invalid stability class {value:?}: expected one of A, B, C, D, E, F")]
    InvalidStabilityClass {
        /// The rejected input, as given.
        value: String,
    },

    /// A model input violated its numeric precondition.
    #[error("invalid parameter `{parameter}`: {source}")]
    InvalidParameter {
        /// Name of the offending input.
        parameter: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },
}

impl DispersionError {
    /// Returns a closure that wraps a [`ConstraintError`] for the named parameter.
    ///
    /// Intended for use with [`Result::map_err`].
    pub(crate) fn invalid(parameter: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { parameter, source }
    }
}
