use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a [`SimulationStore`](super::SimulationStore).
///
/// Every variant means the archive could not complete the operation; none of
/// them indicate a problem with the caller's input.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store cannot serve requests (e.g., its lock was poisoned by a
    /// panicking writer).
    #[error("store unavailable: {context}")]
    Unavailable { context: String },

    /// Reading or writing the backing file failed.
    #[error("i/o error on {}: {context}", path.display())]
    Io {
        path: PathBuf,
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be encoded. Nothing was written.
    #[error("failed to encode record")]
    Encode(#[source] serde_json::Error),

    /// A stored line could not be decoded.
    #[error("corrupt record at {}:{line}", path.display())]
    Corrupt {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(super) fn poisoned() -> Self {
        Self::Unavailable {
            context: "lock poisoned by a failed writer".to_string(),
        }
    }

    pub(super) fn io(
        path: impl Into<PathBuf>,
        context: &'static str,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io {
            path,
            context,
            source,
        }
    }
}
