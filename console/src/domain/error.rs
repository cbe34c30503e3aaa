//! Shared error taxonomy for resource operations.
//!
//! These errors are transport agnostic. [`Validation`](ResourceError::Validation)
//! and [`Unsupported`](ResourceError::Unsupported) are raised before any
//! network call is made; [`Network`](ResourceError::Network) and
//! [`Server`](ResourceError::Server) are raised by adapters. Every operation
//! is single-attempt: no failure here is retried or escalated to a fatal
//! condition, and the controller surfaces each one through the notifier.

use thiserror::Error;

/// Failure categories for a single resource operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// The operation has no endpoint configured for this resource.
    #[error("{operation} is not supported for this resource")]
    Unsupported { operation: String },
    /// The caller-supplied draft failed local pre-flight validation.
    #[error("{message}")]
    Validation { message: String },
    /// The transport failed before the API could answer.
    #[error("request failed: {message}")]
    Network { message: String },
    /// The transport succeeded but the API signalled `status: false`.
    #[error("{message}")]
    Server { message: String },
}

impl ResourceError {
    /// Helper for unconfigured operations.
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }

    /// Helper for local pre-flight validation failures.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Helper for transport-level failures.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Helper for API-signalled failures, carrying the server message.
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Text shown to the user when this error is surfaced.
    ///
    /// Server and validation messages are already user-facing and pass
    /// through verbatim; transport failures collapse into the generic
    /// fallback the original screens toasted.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { .. } => "Something went wrong. Please try again.".to_owned(),
            Self::Unsupported { .. } | Self::Validation { .. } | Self::Server { .. } => {
                self.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ResourceError::server("Name already exists"), "Name already exists")]
    #[case(ResourceError::validation("Question cannot be empty"), "Question cannot be empty")]
    #[case(
        ResourceError::unsupported("create"),
        "create is not supported for this resource"
    )]
    fn user_message_passes_through(#[case] error: ResourceError, #[case] expected: &str) {
        assert_eq!(error.user_message(), expected);
    }

    #[rstest]
    fn network_errors_collapse_to_generic_text() {
        let error = ResourceError::network("connection refused");
        assert_eq!(error.user_message(), "Something went wrong. Please try again.");
        assert_eq!(error.to_string(), "request failed: connection refused");
    }
}
