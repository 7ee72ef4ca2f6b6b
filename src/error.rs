//! Crate-level error types.

use std::fmt;

/// Errors produced by the prediction page flows.
///
/// Each one is terminal for the action that raised it: the caller aborts,
/// surfaces a single user-visible alert, and waits for the next user action.
/// Nothing is retried automatically, and the explanation renderer itself
/// never raises any of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DtiError {
    /// Target catalog fetch or decode failure.
    CatalogLoad(String),
    /// The molecule editor widget has not finished initializing.
    WidgetNotReady,
    /// Missing user input: no structure drawn, or no target selected.
    EmptyInput(String),
    /// Transport-level failure talking to the prediction service.
    Network(String),
    /// The service answered with a non-success status.
    Service {
        /// Failure description from the service's `detail` field.
        detail: String,
    },
}

impl fmt::Display for DtiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogLoad(msg) => {
                write!(f, "failed to load targets: {msg}")
            }
            Self::WidgetNotReady => {
                write!(f, "molecule editor not yet ready, please wait")
            }
            Self::EmptyInput(msg) => write!(f, "{msg}"),
            Self::Network(msg) => {
                write!(f, "network error during prediction: {msg}")
            }
            Self::Service { detail } => {
                write!(f, "prediction failed: {detail}")
            }
        }
    }
}

impl std::error::Error for DtiError {}
