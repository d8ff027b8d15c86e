//! Errors, warnings, and the three-valued result domain of handler operations.

use crate::linktype::LinkType;

/// Errors raised by framing handlers and the handler registry.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum DltError {
    /// A handler for this link type is already registered.
    #[error("a handler for link type {0} is already registered")]
    DuplicateHandler(LinkType),
    /// No handler was registered for the requested link type.
    #[error("no handler registered for link type {0}")]
    UnregisteredLinkType(LinkType),
    /// The handler was used for packet processing before being initialized.
    #[error("handler {0} was not initialized")]
    NotInitialized(&'static str),
    /// The packet contained no data to inspect.
    #[error("packet is empty")]
    EmptyPacket,
    /// The packet is shorter than the link header the handler expected.
    #[error("packet of {actual} bytes is shorter than the {expected}-byte link header")]
    TruncatedPacket {
        /// Bytes the link header requires.
        expected: usize,
        /// Bytes actually present.
        actual: usize,
    },
    /// The payload's IP version nibble matched neither IPv4 nor IPv6.
    #[error("unsupported payload with version nibble {0}: doesn't look like IPv4 or IPv6")]
    UnrecognizedPayload(u8),
    /// The handler's link type does not support the requested operation.
    #[error("the {0} handler does not support packet encoding")]
    EncodeUnsupported(&'static str),
}

/// A recoverable condition noted by an otherwise successful operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning(String);

impl Warning {
    /// Creates a warning with the given human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Returns the warning's message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The successful half of the three-valued {Error, Ok, Warn} result domain.
///
/// Handler operations either fail outright with a [`DltError`], succeed, or
/// succeed while noting a recoverable condition the pipeline may want to
/// report. The latter two are distinguished here so a caller cannot drop a
/// warning without seeing it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Completion<T> {
    /// The operation succeeded.
    Ok(T),
    /// The operation succeeded but noted a recoverable condition.
    Warn(T, Warning),
}

impl<T> Completion<T> {
    /// Consumes the completion, returning its value and discarding any warning.
    pub fn into_value(self) -> T {
        match self {
            Completion::Ok(value) | Completion::Warn(value, _) => value,
        }
    }

    /// Returns the warning, if the operation noted one.
    pub fn warning(&self) -> Option<&Warning> {
        match self {
            Completion::Ok(_) => None,
            Completion::Warn(_, warning) => Some(warning),
        }
    }
}

/// Result of a handler or registry operation.
pub type DltResult<T> = Result<Completion<T>, DltError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_exposes_warning() {
        let completion = Completion::Warn((), Warning::new("stale scratch"));
        assert_eq!(completion.warning().map(Warning::message), Some("stale scratch"));
        completion.into_value();

        let completion = Completion::Ok(3);
        assert_eq!(completion.warning(), None);
        assert_eq!(completion.into_value(), 3);
    }

    #[test]
    fn errors_carry_descriptive_messages() {
        assert_eq!(
            DltError::UnrecognizedPayload(5).to_string(),
            "unsupported payload with version nibble 5: doesn't look like IPv4 or IPv6"
        );
        assert_eq!(
            DltError::UnregisteredLinkType(LinkType::RAW).to_string(),
            "no handler registered for link type RAW"
        );
    }
}
